//! Interview Form Schemas
//!
//! One declarative schema per service drives the single generic wizard
//! page: section layout, field specs, required-field validation, and the
//! derived "current section" used for next-section navigation.

use crate::models::FormRecord;
use crate::services::ServiceKind;

/// One form field
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub multiline: bool,
}

/// One titled group of fields, scroll target for section navigation
pub struct SectionSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Candidate id style for a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCase {
    Lower,
    Upper,
}

impl IdCase {
    pub fn ids(&self) -> [&'static str; 3] {
        match self {
            IdCase::Lower => ["a", "b", "c"],
            IdCase::Upper => ["A", "B", "C"],
        }
    }
}

/// Declarative description of one service's interview form
pub struct ServiceSchema {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [SectionSpec],
    pub id_case: IdCase,
}

const fn field(
    key: &'static str,
    label: &'static str,
    placeholder: &'static str,
    required: bool,
    multiline: bool,
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        placeholder,
        required,
        multiline,
    }
}

static ICON_SCHEMA: ServiceSchema = ServiceSchema {
    kind: ServiceKind::Icon,
    title: "Brand Icon Interview",
    intro: "Tell us about your brand so we can draft icon directions.",
    sections: &[
        SectionSpec {
            id: "brand",
            label: "Brand",
            fields: &[
                field("brandName", "Brand name", "e.g. Mellow Lab", true, false),
                field("productName", "Product name", "What the brand sells", true, false),
                field(
                    "targetCustomer",
                    "Target customer",
                    "Who should recognize this icon at a glance",
                    true,
                    false,
                ),
            ],
        },
        SectionSpec {
            id: "style",
            label: "Style",
            fields: &[
                field(
                    "styleKeyword",
                    "Style keyword",
                    "e.g. minimal, hand-drawn, geometric",
                    true,
                    false,
                ),
                field("colorMood", "Color mood", "e.g. warm cream with forest green", true, false),
                field(
                    "referenceNote",
                    "Reference note",
                    "Icons or brands you like, and why",
                    false,
                    true,
                ),
            ],
        },
        SectionSpec {
            id: "constraints",
            label: "Constraints",
            fields: &[
                field("mustInclude", "Must include", "Motif or initial that has to appear", false, false),
                field("avoidElements", "Avoid", "Anything the icon must not use", false, false),
            ],
        },
    ],
    id_case: IdCase::Lower,
};

static AICUT_SCHEMA: ServiceSchema = ServiceSchema {
    kind: ServiceKind::Aicut,
    title: "AI Cut Model Interview",
    intro: "Describe the product and the virtual model look you want.",
    sections: &[
        SectionSpec {
            id: "product",
            label: "Product",
            fields: &[
                field("brandName", "Brand name", "Optional, shown in captions", false, false),
                field("productName", "Product name", "The item the model presents", true, false),
                field(
                    "productFeature",
                    "Key feature",
                    "The one thing the cut must show",
                    true,
                    true,
                ),
            ],
        },
        SectionSpec {
            id: "model",
            label: "Model",
            fields: &[
                field(
                    "modelPersona",
                    "Model persona",
                    "e.g. calm 30s professional, playful student",
                    true,
                    false,
                ),
                field("targetCustomer", "Target customer", "Who the cut should speak to", true, false),
            ],
        },
        SectionSpec {
            id: "direction",
            label: "Direction",
            fields: &[
                field("scenario", "Scenario", "Where and how the product is used", true, true),
                field("tone", "Tone", "e.g. warm, premium, energetic", true, false),
                field("goal", "Goal", "What this cut should achieve", false, false),
            ],
        },
    ],
    id_case: IdCase::Upper,
};

static STAGING_SCHEMA: ServiceSchema = ServiceSchema {
    kind: ServiceKind::Staging,
    title: "Staging Cut Interview",
    intro: "Set the scene for a styled product shot.",
    sections: &[
        SectionSpec {
            id: "product",
            label: "Product",
            fields: &[
                field("brandName", "Brand name", "Optional", false, false),
                field("productName", "Product name", "The item to stage", true, false),
            ],
        },
        SectionSpec {
            id: "scene",
            label: "Scene",
            fields: &[
                field("placeMood", "Place and mood", "e.g. sunlit kitchen counter, morning calm", true, false),
                field("propsKeyword", "Props", "Supporting objects around the product", true, false),
                field("lightingNote", "Lighting note", "Optional lighting direction", false, false),
            ],
        },
        SectionSpec {
            id: "output",
            label: "Output",
            fields: &[
                field(
                    "targetPlatform",
                    "Target platform",
                    "Where the shot will run",
                    true,
                    false,
                ),
                field("seasonEvent", "Season or event", "Optional seasonal hook", false, false),
            ],
        },
    ],
    id_case: IdCase::Lower,
};

static POSTER_SCHEMA: ServiceSchema = ServiceSchema {
    kind: ServiceKind::Poster,
    title: "Promo Poster Interview",
    intro: "Give us the message and audience for your campaign poster.",
    sections: &[
        SectionSpec {
            id: "product",
            label: "Product",
            fields: &[
                field("brandName", "Brand name", "Optional", false, false),
                field("productName", "Product name", "What the poster promotes", true, false),
            ],
        },
        SectionSpec {
            id: "audience",
            label: "Audience",
            fields: &[
                field("targetPlatform", "Target platform", "e.g. Instagram, in-store print", true, false),
                field(
                    "targetCustomer",
                    "Target customer",
                    "e.g. 20s office workers",
                    true,
                    false,
                ),
            ],
        },
        SectionSpec {
            id: "message",
            label: "Message",
            fields: &[
                field("tone", "Tone", "e.g. minimal, loud, nostalgic", true, false),
                field("keyMessage", "Key message", "The single line to land", true, true),
                field("goal", "Goal", "e.g. increase CTR, drive store visits", true, false),
            ],
        },
    ],
    id_case: IdCase::Upper,
};

impl ServiceSchema {
    pub fn for_kind(kind: ServiceKind) -> &'static ServiceSchema {
        match kind {
            ServiceKind::Icon => &ICON_SCHEMA,
            ServiceKind::Aicut => &AICUT_SCHEMA,
            ServiceKind::Staging => &STAGING_SCHEMA,
            ServiceKind::Poster => &POSTER_SCHEMA,
        }
    }

    /// All fields, section order
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Required field keys, section order
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields()
            .filter(|f| f.required)
            .map(|f| f.key)
            .collect()
    }

    /// Required fields whose trimmed value is empty
    pub fn missing_required(&self, form: &FormRecord) -> Vec<&'static FieldSpec> {
        self.fields()
            .filter(|f| f.required && !form.is_filled(f.key))
            .collect()
    }

    /// True iff every required field is non-empty after trimming
    pub fn can_analyze(&self, form: &FormRecord) -> bool {
        self.missing_required(form).is_empty()
    }

    /// First section with a missing required field, else the last section.
    /// Display state only, there is no transition function behind it.
    pub fn current_section(&self, form: &FormRecord) -> &'static SectionSpec {
        self.sections
            .iter()
            .find(|s| s.fields.iter().any(|f| f.required && !form.is_filled(f.key)))
            .unwrap_or_else(|| self.sections.last().expect("schema has sections"))
    }

    /// (filled required, total required) for the completion meter
    pub fn progress(&self, form: &FormRecord) -> (usize, usize) {
        let total = self.required_fields().len();
        let missing = self.missing_required(form).len();
        (total - missing, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(schema: &ServiceSchema) -> FormRecord {
        let mut form = FormRecord::new();
        for f in schema.fields() {
            form.set(f.key, format!("value for {}", f.key));
        }
        form
    }

    #[test]
    fn test_every_schema_has_required_fields() {
        for kind in ServiceKind::ALL {
            let schema = ServiceSchema::for_kind(kind);
            assert_eq!(schema.kind, kind);
            assert!(!schema.required_fields().is_empty());
            assert!(!schema.sections.is_empty());
        }
    }

    #[test]
    fn test_poster_required_set_matches_contract() {
        let schema = ServiceSchema::for_kind(ServiceKind::Poster);
        assert_eq!(
            schema.required_fields(),
            vec![
                "productName",
                "targetPlatform",
                "targetCustomer",
                "tone",
                "keyMessage",
                "goal"
            ]
        );
    }

    #[test]
    fn test_can_analyze_requires_every_required_field() {
        // Exhaustive: drop each required field in turn, and each
        // combination of two, from an otherwise complete form.
        for kind in ServiceKind::ALL {
            let schema = ServiceSchema::for_kind(kind);
            let full = filled_form(schema);
            assert!(schema.can_analyze(&full));

            let required = schema.required_fields();
            for missing in &required {
                let mut form = full.clone();
                form.set(missing, "   ".to_string());
                assert!(!schema.can_analyze(&form), "{}: {}", kind.as_str(), missing);
            }
            for a in &required {
                for b in &required {
                    let mut form = full.clone();
                    form.set(a, String::new());
                    form.set(b, String::new());
                    assert!(!schema.can_analyze(&form));
                }
            }
        }
    }

    #[test]
    fn test_optional_fields_do_not_gate_analyze() {
        for kind in ServiceKind::ALL {
            let schema = ServiceSchema::for_kind(kind);
            let mut form = FormRecord::new();
            for key in schema.required_fields() {
                form.set(key, "x".to_string());
            }
            assert!(schema.can_analyze(&form));
        }
    }

    #[test]
    fn test_current_section_walks_forward() {
        let schema = ServiceSchema::for_kind(ServiceKind::Poster);
        let mut form = FormRecord::new();
        assert_eq!(schema.current_section(&form).id, "product");

        form.set("productName", "Tumbler".to_string());
        assert_eq!(schema.current_section(&form).id, "audience");

        form.set("targetPlatform", "Instagram".to_string());
        form.set("targetCustomer", "20s office workers".to_string());
        assert_eq!(schema.current_section(&form).id, "message");

        form.set("tone", "minimal".to_string());
        form.set("keyMessage", "Keeps drinks cold for 12h".to_string());
        form.set("goal", "increase CTR".to_string());
        // complete form stays on the last section
        assert_eq!(schema.current_section(&form).id, "message");
    }

    #[test]
    fn test_progress_counts_required_only() {
        let schema = ServiceSchema::for_kind(ServiceKind::Icon);
        let mut form = FormRecord::new();
        let (filled, total) = schema.progress(&form);
        assert_eq!(filled, 0);
        assert_eq!(total, schema.required_fields().len());

        form.set("brandName", "Mellow Lab".to_string());
        form.set("referenceNote", "optional only".to_string());
        let (filled, _) = schema.progress(&form);
        assert_eq!(filled, 1);
    }
}
