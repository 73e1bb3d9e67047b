use crate::core::{FrameHost, GlassUniforms, RenderFrame, RepeatingTask, SharedContext, Variant};
use crate::dom;
use crate::input;
use crate::render::GpuState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Where a layer's opacity comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerOpacity {
    Fixed(f32),
    /// Follows the configuration's backdrop opacity every tick.
    Backdrop,
}

/// Browser animation-frame queue behind the `FrameHost` seam.
pub struct RafHost {
    tick: TickSlot,
}

impl FrameHost for RafHost {
    fn request_frame(&self) -> Option<i32> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let closure = tick.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

pub struct FrameContext {
    pub ctx: SharedContext,
    pub canvas: web::HtmlCanvasElement,
    pub variant: Variant,
    pub opacity: LayerOpacity,
    pub gpu: Option<GpuState>,
    pub started: Instant,
    pub pointer: Rc<Cell<[f32; 2]>>,
    applied_css_opacity: Option<f32>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if dom::sync_canvas_backing_size(&self.canvas) {
            log::debug!(
                "[frame] {} canvas {}x{}",
                self.variant.as_str(),
                self.canvas.width(),
                self.canvas.height()
            );
        }
        let config = self.ctx.glass();
        let colors = self.ctx.colors();
        let opacity = match self.opacity {
            LayerOpacity::Fixed(v) => v,
            LayerOpacity::Backdrop => config.backdrop_opacity(),
        }
        .clamp(0.0, 1.0);

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        // Without premultiplied compositing the canvas element carries the opacity
        let shader_opacity = if gpu.premultiplied() {
            opacity
        } else {
            1.0
        };
        let css_opacity = if gpu.premultiplied() { 1.0 } else { opacity };
        if self.applied_css_opacity != Some(css_opacity) {
            _ = self
                .canvas
                .style()
                .set_property("opacity", &css_opacity.to_string());
            self.applied_css_opacity = Some(css_opacity);
        }

        let (w, h) = (self.canvas.width(), self.canvas.height());
        gpu.resize_if_needed(w, h);
        let frame = RenderFrame {
            time_seconds: self.started.elapsed().as_secs_f32(),
            resolution_px: [w, h],
            pointer_px: self.pointer.get(),
        };
        let uniforms =
            GlassUniforms::compose(&frame, &colors, &config, self.variant, shader_opacity);
        match gpu.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState> {
    dom::sync_canvas_backing_size(canvas);
    match GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

/// A canvas continuously painted with the glass field.
///
/// Dropping (or `remove`-ing) the layer cancels the pending animation frame,
/// detaches its listeners and releases the GPU resources.
pub struct GlassLayer {
    state: Rc<RefCell<FrameContext>>,
    task: Rc<RefCell<RepeatingTask<RafHost>>>,
    tick: TickSlot,
    pointer_listener: Option<Closure<dyn FnMut(web::MouseEvent)>>,
    removed: bool,
}

impl GlassLayer {
    pub async fn mount(
        ctx: SharedContext,
        canvas: web::HtmlCanvasElement,
        variant: Variant,
        opacity: LayerOpacity,
    ) -> GlassLayer {
        let gpu = init_gpu(&canvas).await;
        let rendering = gpu.is_some();
        let pointer = Rc::new(Cell::new([0.0, 0.0]));
        let state = Rc::new(RefCell::new(FrameContext {
            ctx,
            canvas: canvas.clone(),
            variant,
            opacity,
            gpu,
            started: Instant::now(),
            pointer: pointer.clone(),
            applied_css_opacity: None,
        }));

        let pointer_listener = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            pointer.set(input::pointer_surface_px(&ev, &canvas));
        }) as Box<dyn FnMut(web::MouseEvent)>);
        if let Some(w) = web::window() {
            _ = w.add_event_listener_with_callback(
                "mousemove",
                pointer_listener.as_ref().unchecked_ref(),
            );
        }

        let tick: TickSlot = Rc::new(RefCell::new(None));
        let task = Rc::new(RefCell::new(RepeatingTask::new(RafHost { tick: tick.clone() })));
        let task_tick = task.clone();
        let state_tick = state.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let result = task_tick
                .borrow_mut()
                .on_frame(|_| state_tick.borrow_mut().frame());
            if let Err(e) = result {
                log::debug!("[frame] late tick ignored: {}", e);
            }
        }) as Box<dyn FnMut()>));

        if rendering {
            task.borrow_mut().start();
            log::info!("[frame] {} layer started", variant.as_str());
        } else {
            log::warn!("[frame] {} layer has no GPU; rendering nothing", variant.as_str());
        }

        GlassLayer {
            state,
            task,
            tick,
            pointer_listener: Some(pointer_listener),
            removed: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.state.borrow().variant
    }

    pub fn is_rendering(&self) -> bool {
        self.task.borrow().is_armed()
    }

    pub fn set_opacity(&self, opacity: LayerOpacity) {
        self.state.borrow_mut().opacity = opacity;
    }

    pub fn remove(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;
        self.task.borrow_mut().cancel();
        // Dropping the closure breaks the tick -> task -> host -> tick cycle
        self.tick.borrow_mut().take();
        if let Some(listener) = self.pointer_listener.take() {
            if let Some(w) = web::window() {
                _ = w.remove_event_listener_with_callback(
                    "mousemove",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
        let mut state = self.state.borrow_mut();
        state.gpu.take();
        log::info!(
            "[frame] {} layer removed after {} frames",
            state.variant.as_str(),
            self.task.borrow().ticks()
        );
    }
}

impl Drop for GlassLayer {
    fn drop(&mut self) {
        self.teardown();
    }
}
