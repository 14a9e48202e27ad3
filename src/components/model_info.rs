//! Model Info Page
//!
//! Static description of the inventory and of what the scoring service
//! returns, rendered from Markdown.

use dass_core::{Choice, Item, Questionnaire, Subscale};
use leptos::prelude::*;

use crate::markdown::parse_markdown;

/// Page source; the subscale and scale tables come from the inventory itself
pub fn model_info_markdown() -> String {
    let questionnaire = Questionnaire::new();
    let mut md = String::from(
        "# About the assessment\n\n\
         The questionnaire is the 21-item short form of the Depression, Anxiety and \
         Stress Scales. Each item describes an experience over the past week and is \
         answered on a four-point frequency scale.\n\n\
         ## Subscales\n\n\
         | Subscale | Items | Example |\n|---|---|---|\n",
    );
    for subscale in Subscale::ALL {
        let ordinals = subscale.ordinals();
        let example = questionnaire
            .subscale_items(subscale)
            .next()
            .map(Item::prompt)
            .unwrap_or_default();
        md.push_str(&format!(
            "| {} | {} to {} | {} |\n",
            subscale.label(),
            ordinals.start(),
            ordinals.end(),
            example
        ));
    }

    md.push_str("\n## Answer scale\n\n");
    for choice in Choice::ALL {
        md.push_str(&format!("- {}\n", choice.label()));
    }

    md.push_str(
        "\n## Results\n\n\
         Answers are scored by the assessment service. For every subscale it returns \
         a score and a severity label. For depression it additionally estimates the \
         likelihood of an increase, shown as a percentage, and its magnitude.\n\n\
         The results are a screening aid, not a diagnosis.\n",
    );
    md
}

#[component]
pub fn ModelInfo() -> impl IntoView {
    let html = parse_markdown(&model_info_markdown());

    view! {
        <article class="model-info" inner_html=html></article>
    }
}
