pub mod shell_html;
pub mod status_html;
pub mod video_html;

/// Dark landing-page theme shared by the server-rendered page and the client shell.
pub(crate) const PAGE_STYLE: &str = r#"<style>
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  background: #000;
  color: #fff;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 20px;
}
.container { max-width: 500px; text-align: center; width: 100%; }
.thumbnail {
  width: 100%;
  max-width: 400px;
  border-radius: 12px;
  margin-bottom: 20px;
  box-shadow: 0 4px 20px rgba(0,0,0,0.5);
}
h1 { font-size: 24px; font-weight: bold; margin-bottom: 12px; line-height: 1.4; }
.price { color: #4CAF50; font-size: 28px; font-weight: bold; margin-bottom: 8px; }
.seller { color: #aaa; font-size: 16px; margin-bottom: 32px; }
.status { font-size: 18px; margin-bottom: 8px; }
.hint { font-size: 14px; color: #888; margin-bottom: 24px; }
.hint a { color: #fff; }
.button {
  display: inline-block;
  padding: 16px 32px;
  background: #FF6B6B;
  color: #fff;
  text-decoration: none;
  border-radius: 8px;
  font-size: 16px;
  font-weight: bold;
  margin: 6px;
  transition: background 0.3s;
}
.button:hover { background: #E55353; }
.button-secondary { background: transparent; border: 2px solid #fff; }
.button-secondary:hover { background: rgba(255,255,255,0.1); }
</style>
"#;
