use yew::prelude::*;

// Control identifier derived from the field label: lower-cased, whitespace
// runs collapsed to single hyphens, everything outside [a-z0-9-] dropped.
pub fn field_id(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect()
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    TextArea,
    File,
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: String,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub kind: FieldKind,
    #[prop_or_default]
    pub optional: bool,
    #[prop_or_default]
    pub file_name: Option<String>,
    #[prop_or_default]
    pub on_file_change: Callback<Event>,
    #[prop_or_default]
    pub view_example_link: Option<String>,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let input_id = field_id(&props.label);

    html! {
        <div class="form-field">
            <label for={input_id.clone()} class="field-label">
                {&props.label}
                {
                    if props.optional {
                        html! { <span class="optional-tag">{" (Optional)"}</span> }
                    } else {
                        html! {}
                    }
                }
            </label>
            {
                match props.kind {
                    FieldKind::TextArea => html! {
                        <textarea
                            id={input_id.clone()}
                            placeholder={props.placeholder.clone()}
                            rows="4"
                        ></textarea>
                    },
                    FieldKind::File => html! {
                        <div class="file-field">
                            <span class="file-name">
                                {
                                    props.file_name.clone()
                                        .unwrap_or_else(|| "Upload your file".to_string())
                                }
                            </span>
                            <label for={input_id.clone()} class="browse-label">
                                {"Browse"}
                            </label>
                            <input
                                type="file"
                                id={input_id.clone()}
                                class="file-input"
                                onchange={props.on_file_change.clone()}
                            />
                        </div>
                    },
                    FieldKind::Text => html! {
                        <input
                            type="text"
                            id={input_id.clone()}
                            placeholder={props.placeholder.clone()}
                        />
                    },
                }
            }
            {
                match (props.kind, props.view_example_link.clone()) {
                    (FieldKind::File, Some(link)) => html! {
                        <a
                            href={link}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="view-example"
                        >
                            {"View Example"}
                        </a>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_asterisk() {
        assert_eq!(field_id("Name*"), "name");
    }

    #[test]
    fn collapses_whitespace_and_drops_punctuation() {
        assert_eq!(
            field_id("Attach screenshot of keen Women followers ratio*"),
            "attach-screenshot-of-keen-women-followers-ratio"
        );
        assert_eq!(
            field_id("Where are you based?* Area, city"),
            "where-are-you-based-area-city"
        );
    }

    #[test]
    fn standalone_separator_words_leave_double_hyphens() {
        // "/" sits between whitespace, so both runs become hyphens and the
        // slash itself is dropped.
        assert_eq!(
            field_id("Your Instagram / Youtube handle*"),
            "your-instagram--youtube-handle"
        );
        assert_eq!(
            field_id("Approx followers / subscribers*"),
            "approx-followers--subscribers"
        );
    }

    #[test]
    fn lowercases_and_keeps_digits() {
        assert_eq!(field_id("Top 10 Cities"), "top-10-cities");
    }

    #[test]
    fn whitespace_runs_collapse_to_single_hyphens() {
        assert_eq!(field_id("Tell  us   about you"), "tell-us-about-you");
        assert_eq!(field_id("  padded label  "), "padded-label");
    }
}
