//! HTML rendering for the movie/hero table.

use moviehero_core::movie_hero::MovieHero;

const PAGE_HEAD: &str = "<html><head><title>Movie Heroes</title></head><body>\
    <h1>Movie Heroes</h1>\
    <table border='1'><tr><th>Movie</th><th>Hero</th></tr>";

const PAGE_TAIL: &str = "</table></body></html>";

/// Render the full page: title, heading and one table row per record, in
/// the order given.
///
/// Cell values are inserted verbatim, without HTML escaping. Markup stored
/// in the `movie_hero` table reaches the browser as markup.
// TODO: decide whether cells should be escaped; the table is trusted today.
pub fn render_movie_table(rows: &[MovieHero]) -> String {
    let mut html = String::from(PAGE_HEAD);
    for row in rows {
        html.push_str("<tr><td>");
        html.push_str(&row.movie);
        html.push_str("</td><td>");
        html.push_str(&row.hero);
        html.push_str("</td></tr>");
    }
    html.push_str(PAGE_TAIL);
    html
}
