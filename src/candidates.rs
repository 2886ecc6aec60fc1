//! Candidate Generation
//!
//! Pure string templating: three fixed proposals per service, filled from
//! the current form. No randomness and no network, identical input gives
//! identical output. Every prompt ends with a brief sheet quoting each
//! non-empty field, so nothing the user typed gets lost on the way out.

use crate::models::{Candidate, FormRecord};
use crate::schema::ServiceSchema;
use crate::services::ServiceKind;

struct Variant {
    name: &'static str,
    summary: Vec<String>,
    lead: String,
    do_list: Vec<String>,
    dont_list: Vec<String>,
}

/// Generate exactly three candidates for the given service form
pub fn make_candidates(schema: &ServiceSchema, form: &FormRecord) -> Vec<Candidate> {
    let variants = match schema.kind {
        ServiceKind::Icon => icon_variants(form),
        ServiceKind::Aicut => aicut_variants(form),
        ServiceKind::Staging => staging_variants(form),
        ServiceKind::Poster => poster_variants(form),
    };

    let sheet = brief_sheet(schema, form);
    schema
        .id_case
        .ids()
        .into_iter()
        .zip(variants)
        .map(|(id, v)| Candidate {
            id: id.to_string(),
            name: v.name.to_string(),
            summary: v.summary,
            prompt: format!("{}\n\n{}", v.lead, sheet),
            do_list: v.do_list,
            dont_list: v.dont_list,
        })
        .collect()
}

/// Trimmed field value, or a neutral fallback for display in lead copy
fn value_or<'a>(form: &'a FormRecord, key: &str, fallback: &'a str) -> &'a str {
    let v = form.trimmed(key);
    if v.is_empty() {
        fallback
    } else {
        v
    }
}

/// `Label: value` lines for every non-empty field, section order
fn brief_sheet(schema: &ServiceSchema, form: &FormRecord) -> String {
    let mut sheet = String::from("Brief:");
    for f in schema.fields() {
        let value = form.trimmed(f.key);
        if !value.is_empty() {
            sheet.push_str(&format!("\n- {}: {}", f.label, value));
        }
    }
    sheet
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn icon_variants(form: &FormRecord) -> Vec<Variant> {
    let brand = value_or(form, "brandName", "the brand");
    let product = value_or(form, "productName", "the product");
    let customer = value_or(form, "targetCustomer", "your customers");
    let style = value_or(form, "styleKeyword", "clean");
    let color = value_or(form, "colorMood", "a restrained palette");

    vec![
        Variant {
            name: "Monogram mark",
            summary: vec![
                format!("Initials of {} as a compact geometric mark", brand),
                format!("Reads at avatar size, {} styling", style),
            ],
            lead: format!(
                "Design a monogram icon for {}. Build the mark from the brand \
                 initials, keep the geometry simple, and tune it for small \
                 avatar sizes. Style keyword: {}. Color mood: {}.",
                brand, style, color
            ),
            do_list: strs(&[
                "Single silhouette that survives 32px",
                "Flat shapes, no gradients",
                "Test on light and dark backgrounds",
            ]),
            dont_list: strs(&[
                "Thin hairline strokes",
                "More than two colors",
                "Literal photographic detail",
            ]),
        },
        Variant {
            name: "Product silhouette",
            summary: vec![
                format!("{} reduced to one recognizable outline", product),
                "Works as app icon and favicon alike".to_string(),
            ],
            lead: format!(
                "Design a product-silhouette icon for {}: reduce {} to a single \
                 recognizable outline and fill it with {}. The shape should be \
                 obvious before the name is read.",
                brand, product, color
            ),
            do_list: strs(&[
                "Exaggerate the product's most distinctive curve",
                "Keep negative space generous",
                "One accent color maximum",
            ]),
            dont_list: strs(&[
                "Tiny secondary objects",
                "Text inside the mark",
                "Perspective or 3D depth",
            ]),
        },
        Variant {
            name: "Friendly mascot",
            summary: vec![
                format!("A small character aimed at {}", customer),
                "Warm, rounded, instantly likable".to_string(),
            ],
            lead: format!(
                "Design a mascot icon for {} that {} would want to tap on: a \
                 small rounded character with a {} feel, colored in {}.",
                brand, customer, style, color
            ),
            do_list: strs(&[
                "Rounded forms and a simple face",
                "Consistent 2px-equivalent stroke",
                "Leave room for expressions later",
            ]),
            dont_list: strs(&[
                "Complex poses",
                "Cultural references that age quickly",
                "Harsh neon colors",
            ]),
        },
    ]
}

fn aicut_variants(form: &FormRecord) -> Vec<Variant> {
    let product = value_or(form, "productName", "the product");
    let feature = value_or(form, "productFeature", "its key feature");
    let persona = value_or(form, "modelPersona", "a relatable model");
    let customer = value_or(form, "targetCustomer", "your customers");
    let scenario = value_or(form, "scenario", "a natural daily scene");
    let tone = value_or(form, "tone", "natural");

    vec![
        Variant {
            name: "Studio clean",
            summary: vec![
                format!("{} presents {} on a seamless background", persona, product),
                "Catalog-grade clarity, nothing competes with the product".to_string(),
            ],
            lead: format!(
                "Generate a studio cut: {} holding {} against a seamless \
                 backdrop, lit evenly, {} tone. The framing must make {} \
                 unmistakable.",
                persona, product, tone, feature
            ),
            do_list: strs(&[
                "Eye-level camera, 50mm look",
                "Product label readable",
                "Neutral manicured styling",
            ]),
            dont_list: strs(&[
                "Busy backgrounds",
                "Extreme wide-angle distortion",
                "Props unrelated to the product",
            ]),
        },
        Variant {
            name: "Everyday scene",
            summary: vec![
                format!("{} in use: {}", product, scenario),
                format!("Feels like {}'s own feed", customer),
            ],
            lead: format!(
                "Generate a lifestyle cut: {} using {} in {}. Keep the mood {} \
                 and candid, as if shot by a friend, while {} stays clearly \
                 visible.",
                persona, product, scenario, tone, feature
            ),
            do_list: strs(&[
                "Natural window light",
                "Slight motion, real gestures",
                "Environment hints at the scenario",
            ]),
            dont_list: strs(&[
                "Stiff catalog posing",
                "Over-retouched skin",
                "Logo walls",
            ]),
        },
        Variant {
            name: "Editorial mood",
            summary: vec![
                format!("Premium editorial framing with a {} tone", tone),
                "Magazine-cover light and shadow".to_string(),
            ],
            lead: format!(
                "Generate an editorial cut: {} with {} styled like a magazine \
                 feature aimed at {}. Dramatic but controlled light, {} tone, \
                 generous negative space for copy.",
                persona, product, customer, tone
            ),
            do_list: strs(&[
                "Directional key light",
                "Restrained color grade",
                "Leave headline space",
            ]),
            dont_list: strs(&[
                "Cluttered composition",
                "Snapshot framing",
                "Competing focal points",
            ]),
        },
    ]
}

fn staging_variants(form: &FormRecord) -> Vec<Variant> {
    let product = value_or(form, "productName", "the product");
    let place = value_or(form, "placeMood", "a calm tabletop scene");
    let props = value_or(form, "propsKeyword", "a few quiet props");
    let platform = value_or(form, "targetPlatform", "your channel");

    vec![
        Variant {
            name: "Natural light",
            summary: vec![
                format!("{} in {}", product, place),
                "Soft daylight, believable shadows".to_string(),
            ],
            lead: format!(
                "Stage {} in {}. Use soft natural light, let shadows fall \
                 honestly, and support the scene with {}.",
                product, place, props
            ),
            do_list: strs(&[
                "Morning-window light direction",
                "Real surface textures",
                "Product sharp, props slightly soft",
            ]),
            dont_list: strs(&[
                "Flat frontal flash",
                "Obvious compositing seams",
                "Props taller than the product",
            ]),
        },
        Variant {
            name: "Props story",
            summary: vec![
                format!("{} arranged to tell one small story", props),
                "The product is the protagonist".to_string(),
            ],
            lead: format!(
                "Stage {} surrounded by {} arranged to suggest a moment just \
                 interrupted. Every prop must point back at the product, \
                 composed for {}.",
                product, props, platform
            ),
            do_list: strs(&[
                "Odd-numbered prop groupings",
                "Triangular composition",
                "One human trace, like a pulled-back chair",
            ]),
            dont_list: strs(&[
                "Perfect symmetry",
                "Props from a different season",
                "Crowding the frame edges",
            ]),
        },
        Variant {
            name: "Color block",
            summary: vec![
                "Graphic backdrop in one bold hue".to_string(),
                format!("Thumb-stopping on {}", platform),
            ],
            lead: format!(
                "Stage {} on a single bold color-block backdrop sized for {}. \
                 Hard light, crisp cast shadow, {} reduced to graphic accents.",
                product, platform, props
            ),
            do_list: strs(&[
                "One saturated background hue",
                "Hard shadow as a design element",
                "Center-weighted product",
            ]),
            dont_list: strs(&[
                "Texture-heavy backgrounds",
                "Multiple light colors",
                "Diagonal horizon lines",
            ]),
        },
    ]
}

fn poster_variants(form: &FormRecord) -> Vec<Variant> {
    let product = value_or(form, "productName", "the product");
    let platform = value_or(form, "targetPlatform", "your channel");
    let customer = value_or(form, "targetCustomer", "your audience");
    let tone = value_or(form, "tone", "clear");
    let message = value_or(form, "keyMessage", "the key message");
    let goal = value_or(form, "goal", "the campaign goal");

    vec![
        Variant {
            name: "Message first",
            summary: vec![
                format!("Typography-led: \"{}\" dominates", message),
                format!("{} tone, built for {}", tone, platform),
            ],
            lead: format!(
                "Design a typography-led poster for {}: the line \"{}\" fills \
                 the frame in a {} voice, with {} small and confident below. \
                 Optimized for {} toward {}.",
                product, message, tone, product, platform, goal
            ),
            do_list: strs(&[
                "Two type sizes maximum",
                "Message legible at thumbnail scale",
                "One clear call to action",
            ]),
            dont_list: strs(&[
                "Decorative display fonts",
                "More than one message",
                "Text over busy imagery",
            ]),
        },
        Variant {
            name: "Product hero",
            summary: vec![
                format!("{} large and centered", product),
                "Benefit line anchored to the product".to_string(),
            ],
            lead: format!(
                "Design a product-hero poster: {} rendered large and centered, \
                 \"{}\" anchored directly to it, {} tone. Crop tight so {} \
                 scrollers on {} stop.",
                product, message, tone, customer, platform
            ),
            do_list: strs(&[
                "Product occupies over half the frame",
                "Benefit line within the product's gaze line",
                "Brand mark small, corner-placed",
            ]),
            dont_list: strs(&[
                "Floating product with no shadow",
                "Competing secondary images",
                "Edge-to-edge text",
            ]),
        },
        Variant {
            name: "Lifestyle pull",
            summary: vec![
                format!("A scene {} recognizes as their own", customer),
                format!("Message lands as a caption, goal: {}", goal),
            ],
            lead: format!(
                "Design a lifestyle poster: {} mid-scene with {}, framed the \
                 way {} photograph their day. \"{}\" sits as a quiet caption, \
                 {} tone, composed for {}.",
                customer, product, customer, message, tone, platform
            ),
            do_list: strs(&[
                "Authentic location casting",
                "Caption-style message placement",
                "Palette pulled from the scene",
            ]),
            dont_list: strs(&[
                "Stock-photo smiles",
                "Message shouting over the scene",
                "Heavy vignettes",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded_full_form(schema: &ServiceSchema) -> FormRecord {
        let mut form = FormRecord::new();
        for f in schema.fields() {
            form.set(f.key, format!("  sample {} value  ", f.key));
        }
        form
    }

    #[test]
    fn test_always_three_candidates() {
        for kind in ServiceKind::ALL {
            let schema = ServiceSchema::for_kind(kind);
            assert_eq!(make_candidates(schema, &FormRecord::new()).len(), 3);
            assert_eq!(make_candidates(schema, &padded_full_form(schema)).len(), 3);
        }
    }

    #[test]
    fn test_candidate_ids_per_service() {
        let lower = ["a", "b", "c"];
        let upper = ["A", "B", "C"];
        for (kind, expected) in [
            (ServiceKind::Icon, lower),
            (ServiceKind::Staging, lower),
            (ServiceKind::Aicut, upper),
            (ServiceKind::Poster, upper),
        ] {
            let schema = ServiceSchema::for_kind(kind);
            let ids: Vec<String> = make_candidates(schema, &FormRecord::new())
                .into_iter()
                .map(|c| c.id)
                .collect();
            assert_eq!(ids, expected, "{}", kind.as_str());
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for kind in ServiceKind::ALL {
            let schema = ServiceSchema::for_kind(kind);
            let form = padded_full_form(schema);
            assert_eq!(make_candidates(schema, &form), make_candidates(schema, &form));
        }
    }

    #[test]
    fn test_prompts_quote_every_nonempty_field_verbatim() {
        for kind in ServiceKind::ALL {
            let schema = ServiceSchema::for_kind(kind);
            let form = padded_full_form(schema);
            for candidate in make_candidates(schema, &form) {
                for f in schema.fields() {
                    let trimmed = form.trimmed(f.key);
                    assert!(
                        candidate.prompt.contains(trimmed),
                        "{} candidate {} missing {}",
                        kind.as_str(),
                        candidate.id,
                        f.key
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_fields_stay_out_of_the_brief_sheet() {
        let schema = ServiceSchema::for_kind(ServiceKind::Poster);
        let mut form = FormRecord::new();
        form.set("productName", "Tumbler".to_string());
        for candidate in make_candidates(schema, &form) {
            assert!(candidate.prompt.contains("- Product name: Tumbler"));
            assert!(!candidate.prompt.contains("- Brand name:"));
        }
    }

    #[test]
    fn test_poster_example_scenario() {
        let schema = ServiceSchema::for_kind(ServiceKind::Poster);
        let mut form = FormRecord::new();
        form.set("productName", "Tumbler".to_string());
        form.set("targetPlatform", "Instagram".to_string());
        form.set("targetCustomer", "20s office workers".to_string());
        form.set("tone", "minimal".to_string());
        form.set("keyMessage", "Keeps drinks cold for 12h".to_string());
        form.set("goal", "increase CTR".to_string());

        assert!(schema.can_analyze(&form));
        let candidates = make_candidates(schema, &form);
        assert_eq!(candidates.len(), 3);
        for c in &candidates {
            assert!(c.prompt.contains("Tumbler"));
            assert!(c.prompt.contains("Instagram"));
        }
    }

    #[test]
    fn test_candidate_packages_are_fully_populated() {
        for kind in ServiceKind::ALL {
            let schema = ServiceSchema::for_kind(kind);
            for c in make_candidates(schema, &padded_full_form(schema)) {
                assert!(!c.name.is_empty());
                assert!(!c.summary.is_empty());
                assert!(!c.do_list.is_empty());
                assert!(!c.dont_list.is_empty());
            }
        }
    }
}
