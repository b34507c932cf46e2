//! HTML fixtures shaped like a Medium profile stream, shared by the
//! extraction tests.

/// One well-formed article card.
///
/// Layout: `[byline column, body column, metrics column]`. The byline column
/// nests three `div`s deep before reaching `[avatar, byline]`, and the byline
/// holds `[publication line, date · read time line]`. The body column's anchor
/// wraps the headline and preview image, so the card is its grandparent.
pub fn card(title: &str, href: &str, byline: &str, meta: &str, img_src: &str, applauds: &str) -> String {
    format!(
        r#"
<div class="card">
  <div class="byline-column">
    <div>
      <div>
        <div><img class="avatar" src="https://miro.medium.com/fit/c/40/40/avatar.png"></div>
        <div>
          <span>{byline}</span>
          <span>{meta}</span>
        </div>
      </div>
    </div>
  </div>
  <div class="body-column">
    <a href="{href}">
      <h1>{title}</h1>
      <img src="{img_src}">
    </a>
  </div>
  <div class="metrics-column"><h4>{applauds}</h4></div>
</div>"#
    )
}

/// A card whose anchor and headline are present but that lacks the byline
/// and metrics columns.
pub fn bare_card(title: &str, href: &str) -> String {
    format!(
        r#"
<div class="card">
  <div class="body-column"><a href="{href}"><h1>{title}</h1></a></div>
</div>"#
    )
}

/// Wrap cards in a profile page with navigation links and an author header
/// that must not be picked up as cards.
pub fn profile_page(cards: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Jane Doe – Medium</title></head>
<body>
  <nav>
    <a href="https://medium.com/">Medium</a>
    <a href="">Sign in</a>
    <a>Menu</a>
  </nav>
  <header><h1>Jane Doe</h1><p>Writes about systems programming.</p></header>
  <main><section class="stream">{}</section></main>
</body>
</html>"#,
        cards.concat()
    )
}

/// The first card of the default two-card page.
pub fn ownership_card() -> String {
    card(
        "Ownership in Practice",
        "/@jane/ownership-in-practice-1a2b?source=user_profile---------0----",
        "Jane Doe in Better Programming",
        "Jan 3 Â· 5 min read",
        "https://miro.medium.com/max/1400/1*abc.jpeg?q=20",
        "42",
    )
}

/// The second card of the default two-card page: self-published, with an
/// abbreviated clap count.
pub fn lifetimes_card() -> String {
    card(
        "Lifetimes Without Tears",
        "https://medium.com/@jane/lifetimes-without-tears-3c4d?source=user_profile---------1----",
        "Jane Doe",
        "Dec 12, 2019 Â· 8 min read",
        "https://miro.medium.com/max/1200/1*def.png?q=20",
        "1.2K",
    )
}

/// Profile page with the two default cards.
pub fn two_card_page() -> String {
    profile_page(&[ownership_card(), lifetimes_card()])
}
