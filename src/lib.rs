#![cfg(target_arch = "wasm32")]
//! Interactive spider-web company map.
//!
//! The static organization chart is rendered as an animated canvas scene:
//! each division node gets a procedural web backdrop and a creature avatar,
//! connections become wavy silk strands, and a fixed population of ambient
//! webs, flies and dewdrops drifts behind everything. A pan/zoom camera
//! with drag momentum sits on top.

use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod ambient;
mod builder;
mod camera;
mod constants;
mod data;
mod dom;
mod events;
mod frame;
mod geometry;
mod render;
mod scene;
mod tween;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("webbnest-map starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("map-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #map-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_backing_size(&canvas);

    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let registry = data::NodeRegistry::from_data(data::company_data());
    let viewport = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    let mut scene = scene::Scene::new(registry, viewport);

    let mut rng = rand::thread_rng();
    builder::populate_ambient(&mut scene, &mut rng)?;
    builder::update_network(&mut scene, &mut rng)?;
    log::info!(
        "[scene] nodes={} connections={} ambient={}",
        scene.registry.len(),
        scene.registry.connections().len(),
        scene.ambient.len()
    );

    let scene = Rc::new(RefCell::new(scene));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });
    events::wire_wheel(&canvas, scene.clone());
    events::wire_resize(&canvas, scene.clone());
    dom::set_cursor("grab");

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        ctx2d,
        last_instant: Instant::now(),
    })));

    Ok(())
}
