//! Browser front-end: canvas 2D surface, interval clock and DOM events

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use crate::clock::Clock;
use crate::input::{Key, pointer_x};
use crate::renderer::{ShapeStyle, Surface, TextAlign};
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::Rect;

/// Id of the canvas element the game draws on
const CANVAS_ID: &str = "myCanvas";

/// `CanvasRenderingContext2d` as a drawing surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    /// Fill and/or stroke the current path
    fn paint(&self, style: ShapeStyle<'_>) {
        if let Some(fill) = style.fill {
            self.ctx.set_fill_style_str(fill);
            self.ctx.fill();
        }
        if let Some(stroke) = style.stroke {
            self.ctx.set_stroke_style_str(stroke);
            self.ctx.stroke();
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, region: Rect) {
        self.ctx.clear_rect(
            region.x as f64,
            region.y as f64,
            region.width as f64,
            region.height as f64,
        );
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.stroke();
    }

    fn draw_rect(&mut self, rect: Rect, style: ShapeStyle<'_>) {
        if style.is_invisible() {
            return;
        }
        self.ctx.begin_path();
        self.ctx.rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
        self.paint(style);
        self.ctx.close_path();
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: ShapeStyle<'_>) {
        if style.is_invisible() {
            return;
        }
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.paint(style);
        self.ctx.close_path();
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, font: &str, fill: &str) {
        self.ctx.set_font(font);
        self.ctx.set_text_align(align.as_str());
        self.ctx.set_fill_style_str(fill);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}

/// Handles of whichever browser timers are armed
#[derive(Default)]
struct Timers {
    interval: Option<i32>,
    timeout: Option<i32>,
}

/// `setInterval`-backed clock
pub struct IntervalClock {
    window: Window,
    tick_fn: js_sys::Function,
    timers: Rc<RefCell<Timers>>,
}

impl IntervalClock {
    pub fn new(window: Window, tick_fn: js_sys::Function) -> Self {
        Self {
            window,
            tick_fn,
            timers: Rc::new(RefCell::new(Timers::default())),
        }
    }

    fn clear(&self) {
        let mut timers = self.timers.borrow_mut();
        if let Some(handle) = timers.interval.take() {
            self.window.clear_interval_with_handle(handle);
        }
        if let Some(handle) = timers.timeout.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

fn arm_interval(window: &Window, tick_fn: &js_sys::Function, period_ms: u32, timers: &RefCell<Timers>) {
    match window.set_interval_with_callback_and_timeout_and_arguments_0(tick_fn, period_ms as i32) {
        Ok(handle) => timers.borrow_mut().interval = Some(handle),
        Err(e) => log::error!("setInterval failed: {:?}", e),
    }
}

impl Clock for IntervalClock {
    fn start(&mut self, period_ms: u32) {
        self.clear();
        arm_interval(&self.window, &self.tick_fn, period_ms, &self.timers);
    }

    fn stop(&mut self) {
        self.clear();
    }

    fn start_after(&mut self, delay_ms: u32, period_ms: u32) {
        if delay_ms == 0 {
            self.start(period_ms);
            return;
        }
        self.clear();

        let window = self.window.clone();
        let tick_fn = self.tick_fn.clone();
        let timers = self.timers.clone();
        let resume = Closure::once_into_js(move || {
            timers.borrow_mut().timeout = None;
            arm_interval(&window, &tick_fn, period_ms, &timers);
        });
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(resume.unchecked_ref(), delay_ms as i32)
        {
            Ok(handle) => self.timers.borrow_mut().timeout = Some(handle),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    }

    fn is_running(&self) -> bool {
        let timers = self.timers.borrow();
        timers.interval.is_some() || timers.timeout.is_some()
    }
}

/// Game instance holding the session and its surface
struct Game {
    session: Session<IntervalClock>,
    surface: CanvasSurface,
    canvas: HtmlCanvasElement,
}

impl Game {
    fn redraw(&mut self) {
        self.session.render(&mut self.surface);
    }
}

type GameSlot = Rc<RefCell<Option<Game>>>;

/// Look up the canvas, build the session and start ticking
pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .or_else(|| document.query_selector("canvas").ok().flatten())
        .ok_or_else(|| JsValue::from_str("no canvas"))?
        .dyn_into()?;
    let surface = CanvasSurface::new(&canvas)?;
    let settings = Settings::load().with_playfield(surface.width(), surface.height());

    // The tick callback needs the session and the session's clock needs the
    // callback, so the game goes into a slot filled after both exist.
    let slot: GameSlot = Rc::new(RefCell::new(None));
    let tick_fn = {
        let slot = slot.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(game) = slot.borrow_mut().as_mut() {
                game.session.tick();
                game.redraw();
            }
        });
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        closure.forget();
        function
    };

    let clock = IntervalClock::new(window.clone(), tick_fn);
    let session = Session::new(settings, clock).map_err(|e| JsValue::from_str(&e.to_string()))?;
    *slot.borrow_mut() = Some(Game {
        session,
        surface,
        canvas,
    });

    setup_input_handlers(&window, slot.clone())?;

    if let Some(game) = slot.borrow_mut().as_mut() {
        game.redraw();
        game.session.start();
    }
    log::info!("Canvas Breakout running!");
    Ok(())
}

fn setup_input_handlers(window: &Window, slot: GameSlot) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Key down
    {
        let slot = slot.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_name(&event.key()) else {
                return;
            };
            if let Some(game) = slot.borrow_mut().as_mut() {
                game.session.key_down(key);
            }
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Key up - Enter restarts a finished game
    {
        let slot = slot.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_name(&event.key()) else {
                return;
            };
            if let Some(game) = slot.borrow_mut().as_mut() {
                game.session.key_up(key);
                if key == Key::Restart {
                    game.redraw();
                }
            }
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse move - paddle center follows the pointer
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            if let Some(game) = slot.borrow_mut().as_mut() {
                let x = pointer_x(event.client_x() as f32, game.canvas.offset_left() as f32);
                game.session.pointer_moved(x);
            }
        });
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
