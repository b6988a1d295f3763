use nav_harness::{Harness, NAV_SELECTOR, OPEN_CLASS, TOGGLE_SELECTOR};

#[test]
fn storefront_shell_toggles_its_navigation() -> nav_harness::Result<()> {
    let html = r#"
    <!doctype html>
    <html lang="en">
      <head>
        <meta charset="utf-8">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <title>SmartSort Store</title>
        <link rel="stylesheet" href="/static/css/style.css">
      </head>
      <body>
        <header class="site-header">
          <a class="brand" href="/">SmartSort</a>
          <button class="nav-toggle" type="button" aria-label="Menu">
            <span class="hamburger"></span>
            <span class="hamburger"></span>
            <span class="hamburger"></span>
          </button>
          <nav class="site-nav">
            <ul>
              <li><a href="/">Home</a></li>
              <li><a href="/products">Products</a></li>
              <li><a href="/orders">Orders</a></li>
              <li><a href="/contact">Contact</a></li>
            </ul>
          </nav>
        </header>
        <main>
          <h1>Featured products</h1>
          <p>Browse the catalog below.</p>
        </main>
        <footer><small>&copy; SmartSort</small></footer>
        <script src="/static/js/script.js"></script>
      </body>
    </html>
    "#;

    let mut h = Harness::from_html(html)?;
    h.document_loaded()?;

    h.assert_class(NAV_SELECTOR, OPEN_CLASS, false)?;

    h.click(TOGGLE_SELECTOR)?;
    h.assert_class(NAV_SELECTOR, OPEN_CLASS, true)?;
    assert_eq!(
        h.attr(NAV_SELECTOR, "class")?,
        Some("site-nav nav-open".to_string())
    );

    h.click(TOGGLE_SELECTOR)?;
    h.assert_class(NAV_SELECTOR, OPEN_CLASS, false)?;
    assert_eq!(h.attr(NAV_SELECTOR, "class")?, Some("site-nav".to_string()));
    Ok(())
}

#[test]
fn hamburger_glyph_clicks_reach_the_toggle() -> nav_harness::Result<()> {
    let html = r#"
    <header>
      <button class="nav-toggle" type="button">
        <span class="hamburger"></span>
      </button>
      <nav><ul><li><a href="/">Home</a></li></ul></nav>
    </header>
    "#;

    let mut h = Harness::from_html(html)?;
    h.document_loaded()?;

    h.click(".hamburger")?;
    h.assert_class("nav", OPEN_CLASS, true)?;

    h.click(".hamburger")?;
    h.assert_class("nav", OPEN_CLASS, false)?;
    Ok(())
}

#[test]
fn page_without_toggle_stays_inert_after_load() -> nav_harness::Result<()> {
    let html = r#"
    <!doctype html>
    <body>
      <nav class="site-nav"><ul><li><a href="/">Home</a></li></ul></nav>
      <main><button id="buy" type="button">Buy now</button></main>
    </body>
    "#;

    let mut h = Harness::from_html(html)?;
    h.document_loaded()?;

    h.click("#buy")?;
    h.click("nav a")?;
    assert_eq!(h.attr("nav", "class")?, Some("site-nav".to_string()));
    Ok(())
}

#[test]
fn toggle_before_nav_in_document_order_still_binds() -> nav_harness::Result<()> {
    let html = r#"
    <button class="nav-toggle">Menu</button>
    <div class="spacer"></div>
    <nav></nav>
    "#;

    let mut h = Harness::from_html(html)?;
    h.document_loaded()?;

    h.click(TOGGLE_SELECTOR)?;
    h.assert_class(NAV_SELECTOR, OPEN_CLASS, true)?;
    Ok(())
}

#[test]
fn inline_script_text_does_not_confuse_the_wiring() -> nav_harness::Result<()> {
    let html = r#"
    <nav></nav>
    <button class="nav-toggle">Menu</button>
    <script>
      document.addEventListener('DOMContentLoaded', function(){
        const toggle = document.querySelector('.nav-toggle');
        const nav = document.querySelector('nav');
        if(toggle && nav){
          toggle.addEventListener('click', function(){
            nav.classList.toggle('nav-open');
          });
        }
      });
    </script>
    "#;

    let mut h = Harness::from_html(html)?;
    h.document_loaded()?;

    h.click(TOGGLE_SELECTOR)?;
    h.assert_class(NAV_SELECTOR, OPEN_CLASS, true)?;
    Ok(())
}
