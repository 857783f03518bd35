//! The once-per-frame update cycle, driven by requestAnimationFrame.

use crate::ambient;
use crate::render;
use crate::scene::Scene;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One frame: advance tweens, ambient kinematics and camera momentum,
    /// then draw. Fully synchronous; nothing here blocks or yields.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        let scene = &mut *scene;
        scene.tweens.tick(dt_sec, &mut scene.arena);
        ambient::step_ambient(&mut scene.ambient, &mut scene.arena);
        scene.camera.step_momentum();

        let viewport = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        render::render(scene, &self.ctx2d, viewport);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
