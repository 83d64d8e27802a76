//! Inline stylesheet and script embedded in every generated page.

pub const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: #111827; line-height: 1.6; }
main { max-width: 56rem; margin: 0 auto; padding: 3rem 1.5rem; }
a { color: inherit; }
.link-hover { text-decoration: underline; text-underline-offset: 2px; }
.link-hover:hover { color: #4b5563; }
.hero { display: grid; grid-template-columns: 220px 1fr; gap: 3rem; margin-bottom: 4rem; }
.hero img { width: 100%; height: auto; margin-bottom: 1.5rem; }
.contact { display: flex; flex-direction: column; gap: 0.5rem; font-size: 0.875rem; }
.native-name, .news-date, .venue { color: #4b5563; }
.mb-4 { margin-bottom: 1rem; }
.news { list-style: none; padding: 0; font-size: 0.875rem; }
.news li { display: flex; gap: 0.5rem; margin-bottom: 0.5rem; }
.news-date { flex-shrink: 0; }
.section-divider { border-top: 1px solid #e5e7eb; margin: 3rem 0; }
.publications-header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1.5rem; }
.filters { display: flex; flex-wrap: wrap; gap: 0.5rem; font-size: 0.875rem; }
.filter-button { padding: 0.25rem 0.75rem; border-radius: 0.25rem; background: #f3f4f6; color: #374151; text-decoration: none; }
.filter-button.active { background: #111827; color: #fff; }
.publication { display: grid; grid-template-columns: 180px 1fr; gap: 1.5rem; margin-bottom: 2rem; }
.publication[hidden] { display: none; }
.publication img { width: 100%; max-width: 180px; height: auto; }
.publication h3 { margin: 0 0 0.25rem; font-size: 1.125rem; }
.authors, .venue { margin: 0 0 0.25rem; font-size: 0.875rem; }
.links { display: flex; flex-wrap: wrap; gap: 0.75rem; font-size: 0.875rem; }
.award { color: #dc2626; font-weight: 500; text-decoration: none; }
a.award:hover { color: #991b1b; }
.honors { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; font-size: 0.875rem; }
footer { margin-top: 5rem; padding-top: 2rem; border-top: 1px solid #e5e7eb; text-align: center; font-size: 0.875rem; color: #6b7280; }
@media (max-width: 768px) {
  .hero, .publication, .honors { grid-template-columns: 1fr; }
}
"#;

/// Client-side filter switching.
///
/// Category membership is precomputed into each publication's
/// `data-filters`, so the script only toggles `hidden`. A news link to a
/// hidden publication switches to the show-all category and scrolls after
/// two animation frames, i.e. once the re-filtered list has been painted.
pub const SCRIPT: &str = r##"
(function () {
  var page = document.getElementById("folio");
  if (!page) return;
  var showAll = page.getAttribute("data-show-all");
  var pubs = Array.prototype.slice.call(document.querySelectorAll(".publication"));
  var buttons = Array.prototype.slice.call(document.querySelectorAll("[data-filter]"));
  var known = buttons.map(function (b) { return b.getAttribute("data-filter"); });

  function matches(pub, id) {
    if (known.indexOf(id) < 0) return true;
    return (" " + pub.getAttribute("data-filters") + " ").indexOf(" " + id + " ") >= 0;
  }

  function activate(id) {
    page.setAttribute("data-active-filter", id);
    buttons.forEach(function (b) {
      b.classList.toggle("active", b.getAttribute("data-filter") === id);
    });
    pubs.forEach(function (p) { p.hidden = !matches(p, id); });
  }

  function afterRender(fn) {
    requestAnimationFrame(function () { requestAnimationFrame(fn); });
  }

  function reveal(id) {
    var target = document.getElementById(id);
    if (!target || !target.classList.contains("publication")) return false;
    if (matches(target, page.getAttribute("data-active-filter"))) return false;
    activate(showAll);
    afterRender(function () {
      var el = document.getElementById(id);
      if (el) el.scrollIntoView({ behavior: "smooth" });
    });
    return true;
  }

  buttons.forEach(function (b) {
    b.addEventListener("click", function (e) {
      e.preventDefault();
      activate(b.getAttribute("data-filter"));
    });
  });

  document.querySelectorAll("a[data-anchor]").forEach(function (a) {
    var id = a.getAttribute("data-anchor");
    a.setAttribute("href", "#" + id);
    a.addEventListener("click", function (e) {
      if (reveal(id)) e.preventDefault();
    });
  });

  var initial = new URLSearchParams(window.location.search).get("filter");
  if (initial) activate(initial);
  if (window.location.hash) {
    try {
      reveal(decodeURIComponent(window.location.hash.slice(1)));
    } catch (err) {
      // malformed deep link, leave the page as rendered
    }
  }
})();
"##;
