use lantern_gfx::coords::Bounds;
use serde::Deserialize;

/// One node of a declarative UI document.
///
/// Documents are hierarchical JSON records consumed once per load by the
/// [`crate::factory::Factory`]:
///
/// ```json
/// {
///   "type": "VerticalLayout",
///   "id": "root",
///   "rect": [0.0, 0.0, 1.0, 1.0],
///   "spacing": 0.1,
///   "children": [
///     { "type": "Button", "id": "save", "text": "Save", "onClick": "save" }
///   ]
/// }
/// ```
///
/// `type` and `id` are required; everything else defaults. Color fields hold
/// keys into the application's color table, not literal values. Unrecognized
/// keys are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Widget variant discriminator: Canvas, Button, VerticalLayout,
    /// HorizontalLayout, or List.
    #[serde(rename = "type")]
    pub kind: String,
    /// Element name; must be unique among siblings.
    pub id: String,
    /// Local bounds `[min_x, min_y, max_x, max_y]`, normalized.
    #[serde(default)]
    pub rect: [f32; 4],
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub hover_color: Option<String>,
    #[serde(default)]
    pub pressed_color: Option<String>,
    /// Button label.
    #[serde(default)]
    pub text: String,
    /// Action registry key fired when a Button is clicked.
    #[serde(default)]
    pub on_click: Option<String>,
    /// Layout gap in normalized units.
    #[serde(default)]
    pub spacing: f32,
    #[serde(default)]
    pub children: Vec<Document>,
}

impl Document {
    /// The `rect` field as [`Bounds`].
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rect[0], self.rect[1], self.rect[2], self.rect[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_defaults() {
        let doc: Document = serde_json::from_str(r#"{ "type": "Canvas", "id": "bg" }"#).unwrap();
        assert_eq!(doc.kind, "Canvas");
        assert_eq!(doc.id, "bg");
        assert_eq!(doc.rect, [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(doc.spacing, 0.0);
        assert_eq!(doc.text, "");
        assert!(doc.on_click.is_none());
        assert!(doc.children.is_empty());
    }

    #[test]
    fn camel_case_keys_map() {
        let doc: Document = serde_json::from_str(
            r#"{ "type": "Button", "id": "b", "textColor": "white", "bgColor": "black",
                 "hoverColor": "gray", "pressedColor": "red", "onClick": "go" }"#,
        )
        .unwrap();
        assert_eq!(doc.text_color.as_deref(), Some("white"));
        assert_eq!(doc.bg_color.as_deref(), Some("black"));
        assert_eq!(doc.hover_color.as_deref(), Some("gray"));
        assert_eq!(doc.pressed_color.as_deref(), Some("red"));
        assert_eq!(doc.on_click.as_deref(), Some("go"));
    }

    #[test]
    fn missing_type_is_a_parse_error() {
        assert!(serde_json::from_str::<Document>(r#"{ "id": "x" }"#).is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let doc: Document =
            serde_json::from_str(r#"{ "type": "Canvas", "id": "c", "comment": "ignored" }"#)
                .unwrap();
        assert_eq!(doc.id, "c");
    }
}
