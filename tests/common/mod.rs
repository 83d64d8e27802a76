#![allow(dead_code)]

use folio::content::ContentStore;

/// A small site: two featured papers, one tag-only paper, one untagged paper.
pub const CONTENT: &str = r##"
bio = """
I work on <a href="https://example.org">graphics</a>
and vision.

Second paragraph."""

[site]
title = "Ada Lovelace"
description = "Analyst."
icon = "/images/logo.png"
last_updated = "January 2026"

[profile]
name = "Ada (Countess) Lovelace"
native_name = "Augusta Ada King"
email = "ada@example.org"
google_scholar = "https://scholar.example.org/ada"
photo = "/images/me.jpg"
highlight_author = "Ada Lovelace"

[[filters]]
id = "featured"
label = "Featured"
rule = "featured"

[[filters]]
id = "all"
label = "All"
rule = "all"

[[filters]]
id = "relighting"
label = "Relighting"
rule = { tag = "relighting" }

[[filters]]
id = "view-synthesis"
label = "View Synthesis"
rule = { tag = "view synthesis" }

[[news]]
date = "Dec 2024"
text = "Engine paper won an award."
link = "#engine"

[[news]]
date = "Nov 2024"
text = "Notes paper is out."
link = "#notes"

[[news]]
date = "Oct 2024"
text = "Talk at the Royal Society."
link = "https://example.org/talk"

[[news]]
date = "Sep 2024"
text = "Moved to London."

[[publications]]
id = "notes"
title = "Notes on the Analytical Engine"
authors = "Ada Lovelace, Charles Babbage"
venue = "Scientific Memoirs"
year = "1843"
image = "/images/notes.png"
featured = true
tags = ["view synthesis"]
links = [
  { type = "pdf", url = "https://example.org/notes.pdf" },
  { type = "project", url = "https://example.org/notes" },
]

[[publications]]
id = "bernoulli"
title = "Computing Bernoulli Numbers"
authors = "Charles Babbage, Ada Lovelace, Luigi Menabrea, Ada Lovelace"
venue = "Scientific Memoirs"
year = "1843"
image = "/images/bernoulli.png"
featured = true
tags = ["relighting", "view synthesis"]
links = [
  { type = "code", url = "https://github.com/example/bernoulli" },
  { type = "award", text = "Best Paper Award" },
]

[[publications]]
id = "engine"
title = "The Difference Engine"
authors = "Charles Babbage, Ada Lovelace"
venue = "Proceedings"
image = "/images/engine.png"
tags = ["relighting"]
links = [
  { type = "award", text = "Test of Time", url = "https://example.org/award" },
]

[[publications]]
id = "poetry"
title = "Poetical Science"
authors = "Ada Lovelace"
venue = "Letters"
year = "1844"
image = "/images/poetry.png"

[[awards]]
year = "1843"
text = "Royal Society Medal"

[[services]]
role = "Reviewer"
venue = "Analytical Society"
year = "1842"

[[services]]
role = "Chair"
venue = "Engine Club"
"##;

pub fn store() -> ContentStore {
    ContentStore::from_toml_str(CONTENT).expect("Failed to load test content")
}
