//! HTML for the result page, rendered with maud.

use crate::models::AnalyzeOutcome;
use maud::{html, Markup, DOCTYPE};

const RESULT_CSS: &str = "\
body{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;\
background:#080c19;color:#f5f8ff;font-family:system-ui,sans-serif;text-align:center}\
main{max-width:640px;padding:24px}\
img{width:100%;border-radius:16px;box-shadow:0 12px 40px rgba(0,0,0,.5)}\
.caption{color:#c8d2e6;margin:20px 0}\
a.button{display:inline-block;margin:8px;padding:12px 22px;border-radius:999px;\
background:#5ab4ff;color:#080c19;text-decoration:none;font-weight:600}";

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (RESULT_CSS) }
            }
            body {
                main { (content) }
            }
        }
    }
}

/// Page showing the generated poster with download and retry links
pub fn result_page(outcome: &AnalyzeOutcome) -> Markup {
    let content = html! {
        h1 { "Ton résultat" }
        img src=(outcome.poster_url) alt=(outcome.caption);
        p.caption { (outcome.caption) }
        a.button href=(outcome.poster_url) download { "Télécharger" }
        a.button href="/" { "Recommencer" }
    };
    base_document("Résultat", content)
}
