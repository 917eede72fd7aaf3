use std::cmp::Ordering;

use shared::scene::{normal_color, Affine, TextSlice};
use shared::{OrbitControls, SceneSpec};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};
use yew::prelude::*;

use crate::services::Logger;

/// Font size the glyphs are rasterized at before scaling into world units
const FONT_PX: f64 = 100.0;
const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 400;

#[derive(Properties, PartialEq)]
pub struct SceneCanvasProps {
    pub label: AttrValue,
}

pub enum Msg {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp,
}

/// Extruded text that can be rotated by dragging. Zoom is disabled, so
/// wheel events are left to the page.
pub struct SceneCanvas {
    canvas_ref: NodeRef,
    spec: SceneSpec,
    controls: OrbitControls,
    drag_from: Option<(f64, f64)>,
}

impl Component for SceneCanvas {
    type Message = Msg;
    type Properties = SceneCanvasProps;

    fn create(ctx: &Context<Self>) -> Self {
        let spec = SceneSpec::with_label(&ctx.props().label);
        let controls = spec.orbit_controls();
        Self {
            canvas_ref: NodeRef::default(),
            spec,
            controls,
            drag_from: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerDown(e) => {
                if let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(err) = canvas.set_pointer_capture(e.pointer_id()) {
                        // Dragging still works while the pointer stays over the canvas
                        Logger::debug_with_component("scene", &format!("pointer capture refused: {:?}", err));
                    }
                }
                self.drag_from = Some((f64::from(e.client_x()), f64::from(e.client_y())));
            }
            Msg::PointerMove(e) => {
                if let Some((x, y)) = self.drag_from {
                    let (nx, ny) = (f64::from(e.client_x()), f64::from(e.client_y()));
                    let height = self
                        .canvas_ref
                        .cast::<HtmlCanvasElement>()
                        .map(|canvas| f64::from(canvas.client_height()))
                        .unwrap_or(f64::from(CANVAS_HEIGHT));
                    self.controls.rotate_by_pixels(nx - x, ny - y, height);
                    self.drag_from = Some((nx, ny));
                    self.draw();
                }
            }
            Msg::PointerUp => {
                self.drag_from = None;
            }
        }
        // Drawing happens on the canvas directly, the DOM never changes
        false
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().label != old_props.label {
            self.spec.text = ctx.props().label.to_string();
            self.draw();
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.draw();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <canvas
                ref={self.canvas_ref.clone()}
                class="scene-canvas"
                role="img"
                aria-label={ctx.props().label.clone()}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                onpointerdown={link.callback(Msg::PointerDown)}
                onpointermove={link.callback(Msg::PointerMove)}
                onpointerup={link.callback(|_: PointerEvent| Msg::PointerUp)}
                onpointercancel={link.callback(|_: PointerEvent| Msg::PointerUp)}
            />
        }
    }
}

impl SceneCanvas {
    fn context(&self) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let canvas = self.canvas_ref.cast::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some((canvas, context))
    }

    /// Depth slices of the text, far to near, with their screen transforms.
    fn layers(&self, width: f64, height: f64) -> Vec<(Affine, f64, TextSlice)> {
        let camera = self.controls.camera(width / height);
        let mut layers: Vec<_> = self
            .spec
            .slices()
            .into_iter()
            .filter_map(|slice| {
                camera
                    .plane_transform(slice.z, width, height)
                    .map(|(affine, depth)| (affine, depth, slice))
            })
            .collect();
        layers.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        layers
    }

    fn draw(&self) {
        let Some((canvas, context)) = self.context() else {
            Logger::warn_with_component("scene", "2D canvas context unavailable; scene left blank");
            return;
        };

        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let _ = context.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        context.clear_rect(0.0, 0.0, width, height);
        context.set_font(&format!("bold {}px helvetiker, Helvetica, Arial, sans-serif", FONT_PX));
        context.set_text_align("center");
        context.set_text_baseline("middle");

        let camera = self.controls.camera(width / height);
        let glyph_scale = self.spec.text_size / FONT_PX;

        for (affine, _, slice) in self.layers(width, height) {
            let t = affine.scaled(glyph_scale);
            if context.set_transform(t.a, t.b, t.c, t.d, t.e, t.f).is_err() {
                continue;
            }
            let (r, g, b) = normal_color(camera.view_normal(slice.normal));
            context.set_fill_style_str(&format!("rgb({}, {}, {})", r, g, b));
            if let Err(e) = context.fill_text(&self.spec.text, 0.0, 0.0) {
                Logger::error_with_component("scene", &format!("fill_text failed: {:?}", e));
                break;
            }
        }

        let _ = context.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }
}
