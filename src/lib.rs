use worker::*;

mod catalog;
mod config;
mod deeplink;
mod handlers;
mod templates;
mod utils;
mod view;

#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    // Strip trailing slash (except root) and route the rewritten request
    let url = req.url()?;
    let path = url.path().to_string();

    if path.len() > 1 && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/');
        let mut new_url = url.clone();
        new_url.set_path(if trimmed.is_empty() { "/" } else { trimmed });
        let new_req = Request::new_with_init(
            new_url.as_str(),
            &RequestInit {
                method: req.method(),
                headers: req.headers().clone(),
                ..Default::default()
            },
        )?;
        return build_router().run(new_req, env).await;
    }

    build_router().run(req, env).await
}

fn build_router() -> Router<'static, ()> {
    Router::new()
        .get_async("/v/:videoId", |req, ctx| async move {
            handlers::video::handle(req, ctx).await
        })
        .get_async("/v/:videoId/data", |req, ctx| async move {
            handlers::data::handle(req, ctx).await
        })
        .get("/v/:videoId/shell", handlers::shell::handle)
}
