#![forbid(unsafe_code)]

//! JS-facing driver for the flow field effect.
//!
//! [`FlowFieldWeb`] owns the scheduling policy the core deliberately does
//! not: a self-re-registering `requestAnimationFrame` closure, pointer
//! capture, and the resize lifecycle. The page's side of the contract:
//!
//! ```ignore
//! const fx = new FlowFieldWeb();
//! fx.init(canvas, JSON.stringify({ targetFps: 60 }));
//! fx.start();
//! window.addEventListener("resize", () => {
//!   fx.resize(window.innerWidth, window.innerHeight);
//! });
//! ```
//!
//! Every animation callback snapshots the shared pointer cell, steps the
//! effect once, records the outcome for the cadence report, and schedules
//! its successor. Cancellation (`stop`, `resize`, `destroy`) revokes the
//! pending callback, so a discarded instance never mutates the canvas
//! again.

use crate::options::EffectOptions;
use crate::pointer::SharedPointer;
use crate::surface::CanvasSurface;
use flowfield_core::{CadenceCollector, FlowFieldEffect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

type RafClosure = Closure<dyn FnMut(f64)>;

/// State shared between the JS handle and the animation callback.
struct Driver {
    effect: Option<FlowFieldEffect<CanvasSurface>>,
    collector: CadenceCollector,
    pointer: SharedPointer,
    raf_handle: Option<i32>,
    running: bool,
}

/// Web/WASM flow field surface.
#[wasm_bindgen]
pub struct FlowFieldWeb {
    driver: Rc<RefCell<Driver>>,
    raf_callback: Rc<RefCell<Option<RafClosure>>>,
    canvas: Option<HtmlCanvasElement>,
    options: EffectOptions,
    mousemove: Option<Closure<dyn FnMut(MouseEvent)>>,
}

#[wasm_bindgen]
impl FlowFieldWeb {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let pointer = SharedPointer::new();
        Self {
            driver: Rc::new(RefCell::new(Driver {
                effect: None,
                collector: CadenceCollector::new(),
                pointer,
                raf_handle: None,
                running: false,
            })),
            raf_callback: Rc::new(RefCell::new(None)),
            canvas: None,
            options: EffectOptions::default(),
            mousemove: None,
        }
    }

    /// Bind to an existing `<canvas>` and build the effect at the canvas's
    /// current dimensions.
    ///
    /// `options` is an optional JSON string (see [`EffectOptions`]); absent
    /// fields keep the fixed visual contract.
    pub fn init(
        &mut self,
        canvas: HtmlCanvasElement,
        options: Option<String>,
    ) -> Result<(), JsValue> {
        let options = EffectOptions::from_json(options.as_deref())
            .map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?;
        let ctx = context_2d(&canvas)?;

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        {
            let mut driver = self.driver.borrow_mut();
            driver.effect = Some(FlowFieldEffect::with_params(
                CanvasSurface::new(ctx),
                width,
                height,
                options.params(),
            ));
            driver.collector = CadenceCollector::new();
        }
        self.options = options;
        self.attach_pointer_tracking()?;
        self.canvas = Some(canvas);
        Ok(())
    }

    /// Start (or resume) the animation loop.
    pub fn start(&mut self) -> Result<(), JsValue> {
        {
            let mut driver = self.driver.borrow_mut();
            if driver.effect.is_none() {
                return Err(JsValue::from_str("init must be called before start"));
            }
            if driver.running {
                return Ok(());
            }
            driver.running = true;
        }
        self.ensure_raf_callback();

        let handle = request_frame(&self.raf_callback)
            .ok_or_else(|| JsValue::from_str("requestAnimationFrame unavailable"))?;
        self.driver.borrow_mut().raf_handle = Some(handle);
        Ok(())
    }

    /// Cancel the pending animation callback. The canvas keeps its last
    /// frame; `start` resumes from current state.
    pub fn stop(&mut self) {
        let mut driver = self.driver.borrow_mut();
        driver.running = false;
        if let Some(handle) = driver.raf_handle.take() {
            cancel_frame(handle);
        }
    }

    /// Rebuild for new viewport dimensions.
    ///
    /// Cancels the pending frame, resizes the canvas backing store, and
    /// constructs a fresh effect instance - oscillator, throttle clock, and
    /// gradient all restart from scratch. Restarts the loop if it was
    /// running.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        let was_running = self.driver.borrow().running;
        self.stop();

        let canvas = self
            .canvas
            .as_ref()
            .ok_or_else(|| JsValue::from_str("init must be called before resize"))?;
        canvas.set_width(width);
        canvas.set_height(height);

        {
            let mut driver = self.driver.borrow_mut();
            let surface = driver
                .effect
                .take()
                .map(FlowFieldEffect::into_surface)
                .map(Ok)
                .unwrap_or_else(|| context_2d(canvas).map(CanvasSurface::new))?;
            driver.effect = Some(FlowFieldEffect::with_params(
                surface,
                width as f64,
                height as f64,
                self.options.params(),
            ));
            driver.collector = CadenceCollector::new();
        }

        if was_running {
            self.start()?;
        }
        Ok(())
    }

    /// Publish a pointer position directly (for hosts that do their own
    /// event capture, and for tests).
    #[wasm_bindgen(js_name = setPointer)]
    pub fn set_pointer(&self, x: f64, y: f64) {
        self.driver.borrow().pointer.set(x, y);
    }

    /// Cadence summary for the current effect instance as a JSON string.
    #[wasm_bindgen(js_name = cadenceReport)]
    pub fn cadence_report(&self) -> String {
        self.driver.borrow().collector.report().to_json()
    }

    /// Explicit teardown for JS callers: cancels the loop and releases the
    /// canvas, context, and listeners so they can be reclaimed.
    pub fn destroy(&mut self) {
        self.stop();
        if let Some(closure) = self.mousemove.take()
            && let Some(window) = web_sys::window()
        {
            let _ = window.remove_event_listener_with_callback(
                "mousemove",
                closure.as_ref().unchecked_ref(),
            );
        }
        self.driver.borrow_mut().effect = None;
        self.raf_callback.borrow_mut().take();
        self.canvas = None;
    }

    /// Register the window `mousemove` listener writing the shared cell.
    fn attach_pointer_tracking(&mut self) -> Result<(), JsValue> {
        if self.mousemove.is_some() {
            return Ok(());
        }
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("no window for mousemove"))?;
        let pointer = self.driver.borrow().pointer.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            pointer.set(event.client_x() as f64, event.client_y() as f64);
        });
        window
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        self.mousemove = Some(closure);
        Ok(())
    }

    /// Build the self-re-registering animation callback once.
    fn ensure_raf_callback(&mut self) {
        if self.raf_callback.borrow().is_some() {
            return;
        }
        let driver = Rc::clone(&self.driver);
        let raf_callback = Rc::clone(&self.raf_callback);
        let closure = RafClosure::new(move |timestamp: f64| {
            let mut d = driver.borrow_mut();
            if !d.running {
                d.raf_handle = None;
                return;
            }

            let pointer = d.pointer.get();
            if let Some(effect) = d.effect.as_mut() {
                let outcome = effect.step(timestamp, pointer);
                d.collector.record(timestamp, outcome);
            }

            // Every tick schedules its successor; only an explicit cancel
            // ends the loop. If the host refuses the request there is
            // nothing to draw into anyway, so the loop winds down.
            d.raf_handle = request_frame(&raf_callback);
            if d.raf_handle.is_none() {
                d.running = false;
            }
        });
        *self.raf_callback.borrow_mut() = Some(closure);
    }
}

impl Default for FlowFieldWeb {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the 2D context of a canvas.
fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))
}

/// Schedule the stored callback for the next animation frame.
fn request_frame(callback: &Rc<RefCell<Option<RafClosure>>>) -> Option<i32> {
    let window = web_sys::window()?;
    let borrowed = callback.borrow();
    let closure = borrowed.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

/// Revoke a previously scheduled animation frame.
fn cancel_frame(handle: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(handle);
    }
}
