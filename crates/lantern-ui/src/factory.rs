use std::collections::HashMap;

use lantern_gfx::paint::Color;
use lantern_gfx::resources::{MeshId, ShaderId};
use lantern_gfx::text::FontId;

use crate::action::ActionRegistry;
use crate::context::Context;
use crate::document::Document;
use crate::element::ElementRef;
use crate::error::UiError;
use crate::widgets::button::Button;
use crate::widgets::canvas::Canvas;
use crate::widgets::layout::{HorizontalLayout, VerticalLayout};
use crate::widgets::list::List;

/// Shader table key rectangle widgets draw with.
const UI_SHADER: &str = "ui";
/// Mesh table key for the shared unit quad.
const QUAD_MESH: &str = "quad";

/// Builds element subtrees from declarative [`Document`]s.
///
/// All resources are resolved at build time by key lookup against the
/// caller-supplied tables; a missing key is a hard
/// [`UiError::ResourceNotFound`], never a silent substitution. Construction
/// is pure recursive descent with no partial recovery — the first failure
/// anywhere in a subtree aborts that whole `create` call.
pub struct Factory {
    shaders: HashMap<String, ShaderId>,
    meshes: HashMap<String, MeshId>,
    colors: HashMap<String, Color>,
    font: FontId,
    context: Context,
    actions: ActionRegistry,
}

impl Factory {
    pub fn new(
        shaders: HashMap<String, ShaderId>,
        meshes: HashMap<String, MeshId>,
        colors: HashMap<String, Color>,
        font: FontId,
        context: Context,
        actions: ActionRegistry,
    ) -> Self {
        Self { shaders, meshes, colors, font, context, actions }
    }

    /// Builds the element subtree described by `doc`.
    pub fn create(&self, doc: &Document) -> Result<ElementRef, UiError> {
        match doc.kind.as_str() {
            "Canvas" => {
                let canvas = Canvas::new(
                    self.shader(UI_SHADER, &doc.id)?,
                    self.mesh(QUAD_MESH, &doc.id)?,
                    self.color(doc.color.as_deref().unwrap_or("white"), &doc.id)?,
                );
                let element = ElementRef::new(doc.id.clone(), doc.bounds(), canvas);
                self.attach_children(&element, doc)?;
                Ok(element)
            }

            "Button" => {
                let mut button = Button::new(doc.text.clone(), &self.context)
                    .text_color(self.color(doc.text_color.as_deref().unwrap_or("white"), &doc.id)?)
                    .color(self.color(doc.bg_color.as_deref().unwrap_or("black"), &doc.id)?)
                    .hover_color(self.color(doc.hover_color.as_deref().unwrap_or("white"), &doc.id)?)
                    .pressed_color(
                        self.color(doc.pressed_color.as_deref().unwrap_or("black"), &doc.id)?,
                    );

                // `onClick` names a registry action; an unregistered name
                // resolves to a no-op, so the tree still builds.
                if let Some(key) = &doc.on_click {
                    button = button.on_click(self.actions.get(key));
                }

                Ok(ElementRef::new(doc.id.clone(), doc.bounds(), button))
            }

            "VerticalLayout" => {
                let element =
                    ElementRef::new(doc.id.clone(), doc.bounds(), VerticalLayout::new(doc.spacing));
                self.attach_children(&element, doc)?;
                element.update_child_dimensions();
                Ok(element)
            }

            "HorizontalLayout" => {
                let element = ElementRef::new(
                    doc.id.clone(),
                    doc.bounds(),
                    HorizontalLayout::new(doc.spacing),
                );
                self.attach_children(&element, doc)?;
                element.update_child_dimensions();
                Ok(element)
            }

            "List" => {
                let list = List::new(
                    self.shader(UI_SHADER, &doc.id)?,
                    self.font,
                    self.mesh(QUAD_MESH, &doc.id)?,
                );
                let element = ElementRef::new(doc.id.clone(), doc.bounds(), list);
                self.attach_children(&element, doc)?;
                element.update_child_dimensions();
                Ok(element)
            }

            other => Err(UiError::UnknownElementType { type_name: other.to_string() }),
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn attach_children(&self, parent: &ElementRef, doc: &Document) -> Result<(), UiError> {
        for child_doc in &doc.children {
            let child = self.create(child_doc)?;
            parent.attach_child(&child)?;
        }
        Ok(())
    }

    fn shader(&self, key: &str, element: &str) -> Result<ShaderId, UiError> {
        self.shaders.get(key).copied().ok_or_else(|| UiError::ResourceNotFound {
            kind: "shader",
            key: key.to_string(),
            element: element.to_string(),
        })
    }

    fn mesh(&self, key: &str, element: &str) -> Result<MeshId, UiError> {
        self.meshes.get(key).copied().ok_or_else(|| UiError::ResourceNotFound {
            kind: "mesh",
            key: key.to_string(),
            element: element.to_string(),
        })
    }

    fn color(&self, key: &str, element: &str) -> Result<Color, UiError> {
        self.colors.get(key).copied().ok_or_else(|| UiError::ResourceNotFound {
            kind: "color",
            key: key.to_string(),
            element: element.to_string(),
        })
    }
}
