use crate::camera::{screen_to_world_ray, Camera, OrbitControls};
use crate::drag::DragController;
use crate::input::{self, MouseState};
use crate::picking::Ray;
use crate::scene::SceneState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
    pub camera: Rc<RefCell<Camera>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub drag: Rc<RefCell<DragController>>,
    pub mouse_state: Rc<RefCell<MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn event_ray(w: &InputWiring, pos: Vec2) -> Ray {
    let ndc = input::normalize_pointer(
        pos.x,
        pos.y,
        w.canvas.width() as f32,
        w.canvas.height() as f32,
    );
    let (origin, direction) = screen_to_world_ray(ndc, &w.camera.borrow());
    Ray { origin, direction }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let (down, delta) = {
            let mut ms = w.mouse_state.borrow_mut();
            let delta = Vec2::new(pos.x - ms.x, pos.y - ms.y);
            ms.x = pos.x;
            ms.y = pos.y;
            (ms.down, delta)
        };

        // Orbit input only while the pointer is held and no drag is active;
        // OrbitControls itself also ignores deltas while disabled.
        if down && !w.drag.borrow().is_dragging() {
            let mut controls = w.controls.borrow_mut();
            if ev.shift_key() {
                controls.pan(delta);
            } else {
                controls.rotate(delta);
            }
        }

        // Fresh picking query per event; the model may have moved.
        let ray = event_ray(&w, pos);
        let hits = w.scene.borrow().intersect(&ray);

        let mut scene = w.scene.borrow_mut();
        let hit_point = match scene.model.as_mut() {
            Some(model) => w.drag.borrow_mut().pointer_move(&hits, model),
            None => None,
        };
        scene.apply_hover(hit_point);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
            ms.down = true;
        }

        let ray = event_ray(&w, pos);
        let scene = w.scene.borrow();
        let hits = scene.intersect(&ray);
        if let Some(model) = scene.model.as_ref() {
            if w.drag.borrow_mut().pointer_down(&hits, model) {
                // Camera navigation stays off for the whole drag.
                w.controls.borrow_mut().enabled = false;
                log::info!(
                    "[pointer] begin drag on node {} at {:?}",
                    hits[0].node,
                    hits[0].point
                );
            }
        }

        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Unconditional release, whatever the current ray state.
        w.drag.borrow_mut().pointer_up();
        w.controls.borrow_mut().enabled = true;
        w.mouse_state.borrow_mut().down = false;
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.controls.borrow_mut().zoom(-(ev.delta_y() as f32) * 0.01);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
