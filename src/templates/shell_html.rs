use super::PAGE_STYLE;
use crate::config::Settings;
use crate::deeplink::DeepLinkPlan;
use crate::utils::escape::{escape_html, escape_script_string};
use crate::view::PageLinks;

/// Browser-side rendering of the loaded view. Builds nodes with
/// `textContent` and properties only, never markup strings.
const SHELL_SCRIPT: &str = r#"  var root = document.getElementById('app');

  function el(tag, cls, text) {
    var node = document.createElement(tag);
    if (cls) node.className = cls;
    if (text != null) node.textContent = text;
    return node;
  }

  function replace(nodes) {
    while (root.firstChild) root.removeChild(root.firstChild);
    nodes.forEach(function(node) { root.appendChild(node); });
  }

  function showError(message) {
    document.title = 'Video Not Found - ' + brand;
    replace([el('h1', null, 'Video Not Found'), el('p', null, message)]);
  }

  function showVideo(v) {
    document.title = v.caption + ' - ' + v.formattedPrice + ' | ' + brand;
    var nodes = [];
    if (v.thumbnailUrl) {
      var img = el('img', 'thumbnail');
      img.src = v.thumbnailUrl;
      img.alt = v.caption;
      nodes.push(img);
    }
    nodes.push(el('h1', null, v.caption));
    nodes.push(el('p', 'price', v.formattedPrice));
    nodes.push(el('p', 'seller', 'Sold by ' + v.userName));

    var cta = el('div');
    cta.appendChild(el('p', 'status', 'Opening ' + brand + ' app...'));
    cta.appendChild(el('p', 'hint', "Don't have the app? You'll be redirected to download it."));
    nodes.push(cta);

    var actions = el('div');
    var open = el('a', 'button', 'Open in App');
    open.href = appUrl;
    actions.appendChild(open);
    if (v.videoUrl) {
      var watch = el('a', 'button button-secondary', 'View Video');
      watch.href = v.videoUrl;
      actions.appendChild(watch);
    }
    nodes.push(actions);
    replace(nodes);
  }

  fetch(dataUrl, { headers: { 'Accept': 'application/json' } })
    .then(function(resp) {
      if (!resp.ok) {
        showError('Video not found');
        return null;
      }
      return resp.json();
    })
    .then(function(v) {
      if (!v) return;
      showVideo(v);
      window.launchApp();
    })
    .catch(function(err) {
      console.error('Error fetching video:', err);
      showError('Failed to load video');
    });
"#;

/// Renders the client-rendered variant of the landing page.
///
/// Starts in a loading state and fetches the JSON view from `links.data_path`.
/// The app launch only begins once the video has loaded.
pub fn render_shell(links: &PageLinks, settings: &Settings) -> String {
    let mut html = String::with_capacity(6144);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<meta name=\"robots\" content=\"noindex\">\n");
    html.push_str(&format!(
        "<title>Loading... - {}</title>\n",
        escape_html(&settings.brand_name)
    ));
    html.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_html(&links.canonical_url),
    ));
    html.push_str(PAGE_STYLE);
    html.push_str("</head>\n<body>\n<div class=\"container\" id=\"app\">\n");
    html.push_str("<p class=\"status\">Loading product...</p>\n");
    html.push_str("</div>\n");

    html.push_str(&DeepLinkPlan::new(&links.app_url, settings).render_script(false));

    html.push_str("<script>\n(function() {\n");
    html.push_str(&format!(
        "  var dataUrl = '{}';\n  var appUrl = '{}';\n  var brand = '{}';\n\n",
        escape_script_string(&links.data_path),
        escape_script_string(&links.app_url),
        escape_script_string(&settings.brand_name),
    ));
    html.push_str(SHELL_SCRIPT);
    html.push_str("})();\n</script>\n</body>\n</html>");

    html
}
