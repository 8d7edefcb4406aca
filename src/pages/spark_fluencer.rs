use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_console::log;

use crate::components::form_field::{FieldKind, FormField};
use crate::meta::set_page_meta;

fn picked_file_name(e: &Event) -> Option<String> {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.files()
        .and_then(|files| files.get(0))
        .map(|file| file.name())
}

// A canceled file dialog yields no file and keeps whatever was shown before.
fn next_file_label(current: Option<String>, picked: Option<String>) -> Option<String> {
    picked.or(current)
}

fn file_change_handler(file_name: UseStateHandle<Option<String>>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let picked = picked_file_name(&e);
        if let Some(name) = picked.as_ref() {
            log!("Attached file:", name.clone());
        }
        file_name.set(next_file_label((*file_name).clone(), picked));
    })
}

#[function_component(SparkFluencer)]
pub fn spark_fluencer() -> Html {
    let followers_shot = use_state(|| None::<String>);
    let cities_shot = use_state(|| None::<String>);
    let age_range_shot = use_state(|| None::<String>);

    use_effect_with_deps(move |_| {
        set_page_meta(
            "Spark-fluencer Program | Join Our Creator Community",
            "Join the Spark-fluencer Program and collaborate with Sparkorama. \
             We're looking for passionate influencers and trendsetters in beauty and wellness.",
        );
        || ()
    }, ());

    let on_followers_shot = file_change_handler(followers_shot.clone());
    let on_cities_shot = file_change_handler(cities_shot.clone());
    let on_age_range_shot = file_change_handler(age_range_shot.clone());

    // The form goes nowhere; the submit action is swallowed.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
    });

    html! {
        <div class="sparkfluencer-page">
            <header class="sparkfluencer-header">
                <h1>{"Spark-fluencer Program"}</h1>
            </header>

            <main class="sparkfluencer-content">
                <div class="program-info">
                    <h2>
                        {"Inviting all influencers and today's trendsetters to get onboard as a "}
                        <strong>{"Spark-fluencer!"}</strong>
                    </h2>

                    <div class="info-block">
                        <h3>{"Join The Sparkorama Circle"}</h3>
                        <p>
                            {"Ready to ignite your influence? We're building an exclusive community for creators who are passionate about beauty and wellness. This is more than a campaign; it's a platform to empower your creativity, amplify your unique voice, and connect with a network that celebrates your individuality."}
                        </p>
                    </div>

                    <div class="info-block">
                        <h3>{"Your Creator Perks:"}</h3>
                        <ul class="perks-list">
                            <li><strong>{"Experience Top Salons on Us:"}</strong>{" Enjoy complimentary beauty and wellness services."}</li>
                            <li><strong>{"Monetize Your Influence:"}</strong>{" Earn competitive commissions through our affiliate program."}</li>
                            <li><strong>{"Get the Spotlight:"}</strong>{" Be featured across Sparkorama's official social media channels."}</li>
                            <li><strong>{"Unlock VIP Access:"}</strong>{" Receive exclusive offers and early access to new features."}</li>
                        </ul>
                    </div>

                    <div class="info-block">
                        <h3>{"Does this sound like you? We'd love to connect!"}</h3>
                        <ul class="criteria-list">
                            <li>{"You have a public Instagram profile with over "}<strong>{"10k engaged followers."}</strong></li>
                            <li>{"You're a natural at creating beautiful and engaging content."}</li>
                            <li>{"You shine on camera and love making amazing Reels."}</li>
                            <li>{"You're excited about the idea of an official Instagram collaboration with us."}</li>
                        </ul>
                    </div>
                </div>

                <div class="application-card">
                    <h2>{"Can't wait to join us?"}</h2>
                    <form onsubmit={onsubmit}>
                        <FormField label="Name*" placeholder="Your full name" />
                        <FormField label="Contact*" placeholder="Your email or phone number" />
                        <FormField label="Where are you based?* Area, city" placeholder="e.g., Bandra, Mumbai" />
                        <FormField label="Your Instagram / Youtube handle*" placeholder="@yourhandle" />
                        <FormField label="Approx followers / subscribers*" placeholder="e.g., 15k" />
                        <FormField
                            label="Attach screenshot of keen Women followers ratio*"
                            kind={FieldKind::File}
                            file_name={(*followers_shot).clone()}
                            on_file_change={on_followers_shot}
                            view_example_link={Some("#".to_string())}
                        />
                        <FormField
                            label="Attach screenshot of Top cities*"
                            kind={FieldKind::File}
                            file_name={(*cities_shot).clone()}
                            on_file_change={on_cities_shot}
                            view_example_link={Some("#".to_string())}
                        />
                        <FormField
                            label="Attach screenshot of age range*"
                            kind={FieldKind::File}
                            file_name={(*age_range_shot).clone()}
                            on_file_change={on_age_range_shot}
                            view_example_link={Some("#".to_string())}
                        />
                        <FormField
                            label="Tell us about you and your audience"
                            kind={FieldKind::TextArea}
                            optional={true}
                            placeholder="What makes your content special?"
                        />

                        <button type="submit" class="submit-button">
                            {"Submit Application"}
                        </button>
                    </form>
                </div>
            </main>

            <style>
                {r#"
                .sparkfluencer-page {
                    padding: 120px 2rem 4rem;
                    min-height: 100vh;
                    background: #ffffff;
                    color: #374151;
                }

                .sparkfluencer-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .sparkfluencer-header h1 {
                    font-size: 2.5rem;
                    color: #1f2937;
                }

                .sparkfluencer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }

                .program-info h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #1f2937;
                    margin-bottom: 1.5rem;
                }

                .info-block {
                    margin-bottom: 2rem;
                }

                .info-block h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1f2937;
                    margin-bottom: 0.5rem;
                }

                .info-block p {
                    line-height: 1.7;
                }

                .perks-list,
                .criteria-list {
                    list-style: none;
                    padding: 0;
                }

                .perks-list li,
                .criteria-list li {
                    padding: 0.35rem 0 0.35rem 1.25rem;
                    position: relative;
                    line-height: 1.6;
                }

                .perks-list li::before {
                    content: '•';
                    position: absolute;
                    left: 0;
                    color: #ffc404;
                    font-weight: 700;
                }

                .criteria-list li::before {
                    content: '•';
                    position: absolute;
                    left: 0;
                    color: #1f2937;
                    font-weight: 700;
                }

                .application-card {
                    background: #f9fafb;
                    padding: 2rem;
                    border-radius: 8px;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                    align-self: start;
                }

                .application-card h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1f2937;
                    margin-bottom: 1.5rem;
                }

                .form-field {
                    margin-bottom: 1rem;
                }

                .field-label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.25rem;
                }

                .optional-tag {
                    color: #6b7280;
                    font-weight: 400;
                }

                .form-field input[type="text"],
                .form-field textarea {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    font-size: 1rem;
                    transition: border-color 0.15s ease;
                }

                .form-field input[type="text"]:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #ffc404;
                }

                .file-field {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    background: #ffffff;
                }

                .file-name {
                    color: #6b7280;
                    overflow: hidden;
                    white-space: nowrap;
                    text-overflow: ellipsis;
                    padding-right: 0.5rem;
                }

                .browse-label {
                    cursor: pointer;
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #2563eb;
                    flex-shrink: 0;
                }

                .browse-label:hover {
                    text-decoration: underline;
                }

                .file-input {
                    display: none;
                }

                .view-example {
                    display: inline-block;
                    margin-top: 0.25rem;
                    font-size: 0.8rem;
                    color: #2563eb;
                    text-decoration: none;
                }

                .view-example:hover {
                    text-decoration: underline;
                }

                .submit-button {
                    width: 100%;
                    background: #ffc404;
                    color: #1f2937;
                    font-weight: 700;
                    font-size: 1rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 8px;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    transition: filter 0.2s ease;
                }

                .submit-button:hover {
                    filter: brightness(0.95);
                }

                @media (max-width: 900px) {
                    .sparkfluencer-content {
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }

                    .sparkfluencer-header h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_a_file_shows_its_name() {
        assert_eq!(
            next_file_label(None, Some("photo.png".to_string())),
            Some("photo.png".to_string())
        );
    }

    #[test]
    fn picking_again_replaces_the_previous_name() {
        assert_eq!(
            next_file_label(Some("photo.png".to_string()), Some("ratio.jpg".to_string())),
            Some("ratio.jpg".to_string())
        );
    }

    #[test]
    fn canceled_dialog_keeps_the_previous_name() {
        assert_eq!(
            next_file_label(Some("photo.png".to_string()), None),
            Some("photo.png".to_string())
        );
        assert_eq!(next_file_label(None, None), None);
    }
}
