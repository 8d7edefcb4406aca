use yew::prelude::*;

use crate::meta::set_page_meta;

// Gift card theme. Exactly one is active at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Occasion {
    Birthday,
    Anniversary,
    ValentinesDay,
    Custom,
}

impl Occasion {
    pub const ALL: [Occasion; 4] = [
        Occasion::Birthday,
        Occasion::Anniversary,
        Occasion::ValentinesDay,
        Occasion::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Occasion::Birthday => "Happy Birthday",
            Occasion::Anniversary => "Happy Anniversary",
            Occasion::ValentinesDay => "Happy Valentine's Day",
            Occasion::Custom => "Customise your gift card",
        }
    }
}

impl Default for Occasion {
    fn default() -> Self {
        Occasion::Custom
    }
}

#[derive(Properties, PartialEq)]
struct OccasionCardProps {
    occasion: Occasion,
    selected: bool,
    on_select: Callback<Occasion>,
}

#[function_component(OccasionCard)]
fn occasion_card(props: &OccasionCardProps) -> Html {
    let onclick = {
        let occasion = props.occasion;
        let on_select = props.on_select.clone();
        Callback::from(move |_| {
            on_select.emit(occasion);
        })
    };

    html! {
        <div
            class={classes!(
                "occasion-card",
                props.selected.then(|| "selected")
            )}
            onclick={onclick}
        >
            <h3>{props.occasion.label()}</h3>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class="faq-item">
            <h4>{&props.question}</h4>
            <p>{&props.answer}</p>
        </div>
    }
}

#[function_component(GiftCards)]
pub fn gift_cards() -> Html {
    let selected = use_state(Occasion::default);

    use_effect_with_deps(move |_| {
        set_page_meta(
            "Buy A Gift Card | Sparkorama",
            "Give the gift of choice with a Sparkorama gift card. From a relaxing massage \
             to a stylish new haircut, let them choose the perfect beauty or wellness experience.",
        );
        || ()
    }, ());

    let on_occasion_select = {
        let selected = selected.clone();
        Callback::from(move |occasion: Occasion| {
            selected.set(occasion);
        })
    };

    html! {
        <div class="gift-cards-page">
            <header class="gift-cards-header">
                <h1>{"Buy A Gift Card"}</h1>
                <p>{"The Perfect Gift for Any Occasion"}</p>
            </header>

            <main class="gift-cards-content">
                <p class="intro-text">
                    {"Give the gift of choice with a Sparkorama gift card. From a relaxing massage to a stylish new haircut, let them choose the perfect beauty or wellness experience."}
                </p>

                <div class="occasion-grid">
                    {
                        Occasion::ALL.iter().map(|occasion| {
                            let occasion = *occasion;
                            html! {
                                <OccasionCard
                                    occasion={occasion}
                                    selected={*selected == occasion}
                                    on_select={on_occasion_select.clone()}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="info-columns">
                    <div class="info-column">
                        <h2>{"How It Works:"}</h2>
                        <ol class="steps-list">
                            <li><strong>{"1. Choose Your Amount:"}</strong>{" Select a value for your gift card."}</li>
                            <li><strong>{"2. Add a Personal Touch:"}</strong>{" Write a custom message for the recipient."}</li>
                            <li><strong>{"3. Send Instantly:"}</strong>{" The gift card is delivered directly to their email, ready to use."}</li>
                        </ol>
                    </div>

                    <div class="info-column purchase-column">
                        <h2>{"The Ultimate Beauty & Wellness Gift"}</h2>
                        <p>
                            {"A Sparkorama gift card unlocks access to hundreds of top-rated salons, spas, and barbers. It's the perfect way to let someone you care about discover and book their next moment of self-care, their way."}
                        </p>
                        <button class="purchase-button">
                            {"Purchase a Gift Card"}
                        </button>
                    </div>

                    <div class="info-column">
                        <h2>{"Need to Know"}</h2>
                        <FaqItem
                            question="How can the gift card be used?"
                            answer="The gift card balance can be used to book any service available on the Sparkorama app or website."
                        />
                        <FaqItem
                            question="Do the gift cards expire?"
                            answer="Our gift cards are valid for one year from the date of purchase, giving them plenty of time to choose their perfect experience."
                        />
                        <FaqItem
                            question="Can I use the gift card for multiple appointments?"
                            answer="Yes, the balance can be used across multiple bookings until it runs out."
                        />
                    </div>
                </div>
            </main>

            <style>
                {r#"
                .gift-cards-page {
                    padding: 120px 2rem 4rem;
                    min-height: 100vh;
                    background: #ffffff;
                    color: #374151;
                }

                .gift-cards-header {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .gift-cards-header h1 {
                    font-size: 3rem;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .gift-cards-header p {
                    font-size: 1.15rem;
                    color: #4b5563;
                }

                .gift-cards-content {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .intro-text {
                    text-align: center;
                    max-width: 56rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.7;
                }

                .occasion-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }

                .occasion-card {
                    background: #e5e7eb;
                    color: #374151;
                    border-radius: 16px;
                    padding: 2rem;
                    height: 8rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .occasion-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                }

                .occasion-card.selected {
                    background: #fee2e2;
                    border: 2px solid #f87171;
                    color: #b91c1c;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12);
                }

                .occasion-card h3 {
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .info-columns {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                }

                .info-column h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .steps-list {
                    list-style: none;
                    padding: 0;
                }

                .steps-list li {
                    padding: 0.4rem 0;
                    line-height: 1.6;
                }

                .steps-list strong {
                    color: #111827;
                }

                .purchase-column p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .purchase-button {
                    background: #ffc404;
                    color: #1f2937;
                    font-weight: 700;
                    font-size: 1rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 8px;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .purchase-button:hover {
                    background: #eab308;
                    transform: scale(1.03);
                }

                .faq-item {
                    margin-bottom: 1rem;
                }

                .faq-item h4 {
                    font-weight: 700;
                    color: #1f2937;
                    padding-left: 1rem;
                    position: relative;
                }

                .faq-item h4::before {
                    content: '•';
                    position: absolute;
                    left: 0;
                }

                .faq-item p {
                    color: #4b5563;
                    padding-left: 1rem;
                    line-height: 1.6;
                }

                @media (max-width: 1024px) {
                    .occasion-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .info-columns {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 640px) {
                    .occasion-grid {
                        grid-template-columns: 1fr;
                    }

                    .gift-cards-header h1 {
                        font-size: 2.25rem;
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
    fn customise_is_the_initial_selection() {
        assert_eq!(Occasion::default(), Occasion::Custom);
        assert_eq!(Occasion::default().label(), "Customise your gift card");
    }

    #[test]
    fn the_initial_selection_is_the_last_listed_option() {
        assert_eq!(Occasion::ALL.last().copied(), Some(Occasion::default()));
    }

    #[test]
    fn four_distinct_labeled_occasions() {
        assert_eq!(Occasion::ALL.len(), 4);
        for (i, a) in Occasion::ALL.iter().enumerate() {
            for b in Occasion::ALL.iter().skip(i + 1) {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn labels_match_the_displayed_copy() {
        assert_eq!(Occasion::Birthday.label(), "Happy Birthday");
        assert_eq!(Occasion::Anniversary.label(), "Happy Anniversary");
        assert_eq!(Occasion::ValentinesDay.label(), "Happy Valentine's Day");
        assert_eq!(Occasion::Custom.label(), "Customise your gift card");
    }
}
