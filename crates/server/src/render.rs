//! HTML for the two front-end pages.

use pipeline::DisplayItem;

pub const NO_RESULTS_MESSAGE: &str = "No movies with posters available for this genre.";

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn poster_grid(items: &[DisplayItem]) -> String {
    let mut html = String::from("<div class='poster-grid'>\n");
    for item in items {
        let title = escape_html(&item.title);
        html.push_str(&format!(
            "<div class='poster'><img src='{}' alt='{}'><div class='poster-title'>{}</div></div>\n",
            escape_html(&item.poster),
            title,
            title
        ));
    }
    html.push_str("</div>\n");
    html
}

/// Genre search page
///
/// `genre == None` renders the search form only.
pub fn genre_page(genre: Option<&str>, items: &[DisplayItem]) -> String {
    let mut body = String::from(
        "<h1 class='title'>Recommender System</h1>\n\
         <p class='description'>Search for movies by genre and view their posters below!</p>\n",
    );
    body.push_str(&format!(
        "<form method='get' action='/'><input type='text' name='genre' value='{}' \
         placeholder='Enter a genre (e.g., Action, Comedy, Drama)'></form>\n",
        escape_html(genre.unwrap_or_default())
    ));

    if let Some(genre) = genre {
        if items.is_empty() {
            body.push_str(&format!("<p class='description'>{}</p>\n", NO_RESULTS_MESSAGE));
        } else {
            body.push_str(&format!(
                "<h2 class='title'>Movies in {}</h2>\n",
                escape_html(genre)
            ));
            body.push_str(&poster_grid(items));
        }
    }

    page("Recommender System", &body)
}

/// Showcase page with the fixed movie list
pub fn showcase_page(items: &[DisplayItem]) -> String {
    let mut body = String::from("<h1 class='title'>Movie Posters</h1>\n");
    body.push_str(&poster_grid(items));
    page("Movie Posters", &body)
}
