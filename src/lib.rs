#![cfg(target_arch = "wasm32")]

use crate::camera::{Camera, OrbitControls, OrbitParams};
use crate::drag::DragController;
use crate::input::MouseState;
use crate::picking::PickRoot;
use crate::scene::SceneState;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod drag;
mod events;
mod frame;
mod input;
mod loader;
mod picking;
mod render;
mod scene;
mod xr;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Kick off the async model load; on success the parsed root lands in the
/// handoff slot for the frame loop to install. Failure is logged and the
/// viewer keeps running with no pickable geometry — no retry, no fallback.
fn spawn_model_load(url: &'static str, loaded_model: Rc<RefCell<Option<PickRoot>>>) {
    spawn_local(async move {
        let parsed = match loader::fetch_bytes(url).await {
            Ok(bytes) => loader::parse_model(&bytes),
            Err(e) => Err(e),
        };
        match parsed {
            Ok(root) => {
                let triangles: usize = root.nodes.iter().map(|n| n.triangle_count()).sum();
                log::info!(
                    "[loader] model loaded: {} nodes, {} triangles",
                    root.nodes.len(),
                    triangles
                );
                *loaded_model.borrow_mut() = Some(root);
            }
            Err(e) => log::error!("[loader] failed to load {}: {:?}", url, e),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Head-mounted display handshake, when the browser offers one
    xr::wire_vr_button(&document);

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let camera = Rc::new(RefCell::new(Camera {
        eye: constants::CAMERA_EYE,
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect,
        fovy_radians: constants::CAMERA_FOVY_DEG.to_radians(),
        znear: constants::CAMERA_ZNEAR,
        zfar: constants::CAMERA_ZFAR,
    }));
    let controls = Rc::new(RefCell::new(OrbitControls::new(
        constants::CAMERA_EYE,
        Vec3::ZERO,
        OrbitParams {
            rotate_speed: constants::ORBIT_ROTATE_SPEED,
            pan_speed: constants::ORBIT_PAN_SPEED,
            zoom_speed: constants::ORBIT_ZOOM_SPEED,
            damping: constants::ORBIT_DAMPING,
            min_distance: constants::ORBIT_MIN_DISTANCE,
            max_distance: constants::ORBIT_MAX_DISTANCE,
        },
    )));

    // ---------------- Interaction state ----------------
    let scene = Rc::new(RefCell::new(SceneState::new()));
    let drag = Rc::new(RefCell::new(DragController::new()));
    let mouse_state = Rc::new(RefCell::new(MouseState::default()));
    let loaded_model: Rc<RefCell<Option<PickRoot>>> = Rc::new(RefCell::new(None));

    spawn_model_load(constants::MODEL_URL, loaded_model.clone());

    // Initialize WebGPU
    let gpu = frame::init_gpu(&canvas).await;

    // Pointer handlers (move/down/up/wheel)
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        camera: camera.clone(),
        controls: controls.clone(),
        drag: drag.clone(),
        mouse_state: mouse_state.clone(),
    });

    // Renderer loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        scene,
        camera,
        controls,
        gpu,
        loaded_model,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
