use crate::camera::{Camera, OrbitControls};
use crate::picking::PickRoot;
use crate::render;
use crate::scene::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches. Pointer handlers share the
/// `Rc<RefCell<_>>` fields and the frame reads whatever they last wrote.
pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
    pub camera: Rc<RefCell<Camera>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub gpu: Option<render::GpuState<'a>>,
    /// Handoff slot written by the async model load, drained here.
    pub loaded_model: Rc<RefCell<Option<PickRoot>>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        // Install a freshly loaded model: upload geometry, then make it the
        // pickable root.
        if let Some(root) = self.loaded_model.borrow_mut().take() {
            if let Some(g) = &mut self.gpu {
                g.upload_model(&root);
            }
            self.scene.borrow_mut().model = Some(root);
        }

        let width = self.canvas.width();
        let height = self.canvas.height();
        {
            let mut camera = self.camera.borrow_mut();
            if height > 0 {
                camera.aspect = width as f32 / height as f32;
            }
            self.controls.borrow_mut().update(&mut camera);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            let scene = self.scene.borrow();
            let camera = self.camera.borrow();
            if let Err(e) = g.render(&camera, scene.model.as_ref(), &scene.marker) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
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
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
