//! WebAssembly entry point and browser canvas binding.

use crate::app::{App, AppError};
use scribble_core::{
    Command, Config, LineStyle, Modifiers, Point, PointerEvent, PointerPhase, StrokeColor,
    ToolKind,
};
use scribble_render::Surface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, KeyboardEvent};

fn to_js(err: AppError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Surface drawing onto a 2D canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Resizing a canvas resets its context state
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, background: StrokeColor) {
        let (width, height) = self.size();
        self.ctx.set_fill_style_str(&background.to_hex());
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &LineStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        self.ctx.set_stroke_style_str(&style.color.to_hex());
        self.ctx.set_line_width(style.width);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for point in rest {
            self.ctx.line_to(point.x, point.y);
        }
        self.ctx.stroke();
    }
}

/// Event listener removed again when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Listener, JsValue> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        event,
        callback,
    })
}

/// Match the canvas backing store to its CSS box.
fn fit_canvas(app: &Rc<RefCell<App<CanvasSurface>>>) -> Result<(), AppError> {
    let mut app = app.borrow_mut();
    let Some(surface) = app.surface() else {
        return Ok(());
    };
    let width = surface.canvas().offset_width().max(1) as u32;
    let height = surface.canvas().offset_height().max(1) as u32;
    app.resize(width, height)
}

fn pointer_handler(
    app: &Rc<RefCell<App<CanvasSurface>>>,
    canvas: &HtmlCanvasElement,
    phase: PointerPhase,
) -> impl FnMut(Event) + 'static {
    let app = app.clone();
    let canvas = canvas.clone();
    move |event: Event| {
        let Ok(event) = event.dyn_into::<web_sys::PointerEvent>() else {
            return;
        };
        if phase == PointerPhase::Down {
            // Primary button only
            if event.button() != 0 {
                return;
            }
            let _ = canvas.set_pointer_capture(event.pointer_id());
            event.prevent_default();
        }

        let rect = canvas.get_bounding_client_rect();
        let position = Point::new(
            event.client_x() as f64 - rect.left(),
            event.client_y() as f64 - rect.top(),
        );
        let pointer = PointerEvent::new(phase, position, event.pointer_id());
        if let Err(err) = app.borrow_mut().handle_pointer(&pointer) {
            log::warn!("Pointer {:?} failed: {}", phase, err);
        }
    }
}

/// Freehand sketchpad bound to a `<canvas>` element.
#[wasm_bindgen]
pub struct WebSketchpad {
    app: Rc<RefCell<App<CanvasSurface>>>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl WebSketchpad {
    /// Bind to the canvas with id `canvas_id`. `config_json` overrides the
    /// default tool settings.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<WebSketchpad, JsValue> {
        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(|e| to_js(e.into()))?,
            None => Config::default(),
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas #{} not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.style().set_property("touch-action", "none")?;

        let mut app = App::new(&config).map_err(to_js)?;
        app.attach_surface(CanvasSurface::new(canvas.clone())?);
        let app = Rc::new(RefCell::new(app));
        fit_canvas(&app).map_err(to_js)?;

        let target: &EventTarget = canvas.as_ref();
        let mut listeners = vec![
            listen(target, "pointerdown", pointer_handler(&app, &canvas, PointerPhase::Down))?,
            listen(target, "pointermove", pointer_handler(&app, &canvas, PointerPhase::Move))?,
            listen(target, "pointerup", pointer_handler(&app, &canvas, PointerPhase::Up))?,
            listen(target, "pointerleave", pointer_handler(&app, &canvas, PointerPhase::Leave))?,
            listen(
                target,
                "pointercancel",
                pointer_handler(&app, &canvas, PointerPhase::Cancel),
            )?,
        ];

        let resize_app = app.clone();
        listeners.push(listen(window.as_ref(), "resize", move |_| {
            if let Err(err) = fit_canvas(&resize_app) {
                log::warn!("Resize failed: {}", err);
            }
        })?);

        let key_app = app.clone();
        listeners.push(listen(window.as_ref(), "keydown", move |event: Event| {
            let Ok(event) = event.dyn_into::<KeyboardEvent>() else {
                return;
            };
            let modifiers = Modifiers {
                shift: event.shift_key(),
                ctrl: event.ctrl_key(),
                alt: event.alt_key(),
                meta: event.meta_key(),
            };
            match key_app.borrow_mut().handle_key(&event.key(), modifiers) {
                Ok(true) => event.prevent_default(),
                Ok(false) => {}
                Err(err) => log::warn!("Shortcut {} failed: {}", event.key(), err),
            }
        })?);

        log::info!("Sketchpad bound to #{}", canvas_id);
        Ok(WebSketchpad {
            app,
            _listeners: listeners,
        })
    }

    fn dispatch(&self, command: Command) -> Result<(), JsValue> {
        self.app.borrow_mut().dispatch(command).map_err(to_js)?;
        Ok(())
    }

    /// Select "pencil" or "eraser".
    pub fn select_tool(&self, name: &str) -> Result<(), JsValue> {
        let tool = ToolKind::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown tool: {}", name)))?;
        self.dispatch(Command::SelectTool { tool })
    }

    /// Select a `#rrggbb` stroke color.
    pub fn select_color(&self, hex: &str) -> Result<(), JsValue> {
        let color = StrokeColor::from_hex(hex).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.dispatch(Command::SelectColor { color })
    }

    /// Select a stroke width. Out-of-range values are clamped.
    pub fn select_width(&self, width: f64) -> Result<(), JsValue> {
        self.dispatch(Command::SelectWidth { width })
    }

    pub fn undo(&self) -> Result<(), JsValue> {
        self.dispatch(Command::Undo)
    }

    pub fn redo(&self) -> Result<(), JsValue> {
        self.dispatch(Command::Redo)
    }

    pub fn clear(&self) -> Result<(), JsValue> {
        self.dispatch(Command::Clear)
    }

    pub fn can_undo(&self) -> bool {
        self.app.borrow().session().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.app.borrow().session().can_redo()
    }

    pub fn stroke_count(&self) -> usize {
        self.app.borrow().session().active_strokes().len()
    }

    /// Toolbar state as JSON.
    pub fn ui_state(&self) -> Result<String, JsValue> {
        self.app
            .borrow()
            .ui_state()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger unavailable: {}", err)));
    }

    log::info!("Starting Scribble (WASM)");
}
