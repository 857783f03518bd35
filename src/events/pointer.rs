use crate::constants::{HOVER_SCALE, HOVER_TWEEN_SEC};
use crate::dom;
use crate::scene::Scene;
use crate::tween::{Channel, Ease, Repeat, Tween};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Retarget hover scale tweens and publish the description when the
/// pointed-at avatar changes. Re-issuing a scale tween on an avatar that is
/// mid-animation simply supersedes the prior one.
fn apply_hover(scene: &mut Scene, hit: Option<usize>) {
    if scene.hovered == hit {
        return;
    }

    if let Some(prev) = scene.hovered {
        if let Some(avatar) = scene.avatars.get(prev) {
            let current = scene
                .arena
                .node(avatar.root)
                .map(|n| n.transform.scale.x)
                .unwrap_or(1.0);
            scene.tweens.schedule(Tween::new(
                avatar.root,
                Channel::ScaleUniform,
                current,
                1.0,
                HOVER_TWEEN_SEC,
                Repeat::Once,
                false,
                Ease::CubicOut,
            ));
        }
    }

    if let Some(next) = hit {
        if let Some(avatar) = scene.avatars.get(next) {
            let current = scene
                .arena
                .node(avatar.root)
                .map(|n| n.transform.scale.x)
                .unwrap_or(1.0);
            scene.tweens.schedule(Tween::new(
                avatar.root,
                Channel::ScaleUniform,
                current,
                HOVER_SCALE,
                HOVER_TWEEN_SEC,
                Repeat::Once,
                false,
                Ease::CubicOut,
            ));
            if let Some(node) = scene.registry.get(avatar.node_index) {
                dom::set_description(&node.description);
            }
        }
    }

    scene.hovered = hit;
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        w.scene.borrow_mut().camera.begin_drag(pos);
        dom::set_cursor("grabbing");
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let mut scene = w.scene.borrow_mut();
        if scene.camera.dragging {
            scene.camera.drag_to(pos);
        } else {
            let world = scene.camera.screen_to_world(pos);
            let hit = scene.avatar_at(world);
            apply_hover(&mut scene, hit);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.scene.borrow_mut().camera.end_drag();
        dom::set_cursor("grab");
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
