mod pointer;

pub use pointer::{wire_input_handlers, InputWiring};

use crate::dom;
use crate::scene::Scene;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel zoom, anchored at the cursor. Out-of-range targets are rejected
/// inside the camera and leave the view untouched.
pub fn wire_wheel(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let canvas = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let rect = canvas.get_bounding_client_rect();
        let x_css = ev.client_x() as f32 - rect.left() as f32;
        let y_css = ev.client_y() as f32 - rect.top() as f32;
        let cursor = Vec2::new(
            (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32,
            (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32,
        );
        scene
            .borrow_mut()
            .camera
            .wheel_zoom(ev.delta_y() as f32, cursor);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the canvas backing store sized to the viewport and re-home the
/// camera on the new center.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let canvas = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let viewport = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        scene.borrow_mut().camera.recenter(viewport);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
