//! Canvas 2D renderer: walks the display arena and draws primitives.
//!
//! The camera transform (pan offset, then uniform zoom) is applied once at
//! the root; node transforms nest via save/translate/rotate/scale/restore.
//! Alpha accumulates down the tree and multiplies into stroke/fill alpha.

use crate::geometry::PathOp;
use crate::scene::{DisplayList, Geom, NodeId, Scene};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

fn css_rgba(color: u32, alpha: f32) -> String {
    let r = (color >> 16) & 0xFF;
    let g = (color >> 8) & 0xFF;
    let b = color & 0xFF;
    format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
}

pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d, viewport: Vec2) {
    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);

    ctx.save();
    let cam = &scene.camera;
    _ = ctx.translate(cam.offset.x as f64, cam.offset.y as f64);
    _ = ctx.scale(cam.zoom as f64, cam.zoom as f64);
    draw_node(&scene.arena, scene.root, ctx, 1.0);
    ctx.restore();
}

fn draw_node(arena: &DisplayList, id: NodeId, ctx: &CanvasRenderingContext2d, parent_alpha: f32) {
    let Some(node) = arena.node(id) else {
        return;
    };
    let t = &node.transform;
    let alpha = parent_alpha * t.alpha;

    ctx.save();
    _ = ctx.translate(t.position.x as f64, t.position.y as f64);
    _ = ctx.rotate(t.rotation as f64);
    _ = ctx.scale(t.scale.x as f64, t.scale.y as f64);

    for prim in &node.primitives {
        trace_geom(ctx, &prim.geom);
        if let Some(fill) = prim.fill {
            ctx.set_fill_style_str(&css_rgba(fill.color, fill.alpha * alpha));
            ctx.fill();
        }
        if let Some(stroke) = prim.stroke {
            ctx.set_line_width(stroke.width as f64);
            ctx.set_stroke_style_str(&css_rgba(stroke.color, stroke.alpha * alpha));
            ctx.stroke();
        }
    }

    for &child in &node.children {
        draw_node(arena, child, ctx, alpha);
    }
    ctx.restore();
}

fn trace_geom(ctx: &CanvasRenderingContext2d, geom: &Geom) {
    ctx.begin_path();
    match geom {
        Geom::Segments(segments) => {
            for [a, b] in segments {
                ctx.move_to(a.x as f64, a.y as f64);
                ctx.line_to(b.x as f64, b.y as f64);
            }
        }
        Geom::Polyline(points) => {
            let mut iter = points.iter();
            if let Some(first) = iter.next() {
                ctx.move_to(first.x as f64, first.y as f64);
            }
            for p in iter {
                ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        Geom::Polygon(points) => {
            let mut iter = points.iter();
            if let Some(first) = iter.next() {
                ctx.move_to(first.x as f64, first.y as f64);
            }
            for p in iter {
                ctx.line_to(p.x as f64, p.y as f64);
            }
            ctx.close_path();
        }
        Geom::Path(ops) => {
            for op in ops {
                match *op {
                    PathOp::Move { to } => ctx.move_to(to.x as f64, to.y as f64),
                    PathOp::Quad { ctrl, to } => ctx.quadratic_curve_to(
                        ctrl.x as f64,
                        ctrl.y as f64,
                        to.x as f64,
                        to.y as f64,
                    ),
                }
            }
        }
        Geom::Circle { center, radius } => {
            _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
        }
        Geom::Ellipse { center, radius } => {
            _ = ctx.ellipse(
                center.x as f64,
                center.y as f64,
                radius.x as f64,
                radius.y as f64,
                0.0,
                0.0,
                TAU,
            );
        }
    }
}
