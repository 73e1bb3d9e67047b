use crate::core::PointerGate;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Receives the pointer stream of one element. The element captures the
/// pointer on press, so moves and the release keep arriving while the
/// pointer is outside it. Only the pointer that started the gesture is
/// forwarded; a second finger is ignored until the first lifts.
pub trait PointerGesture {
    fn down(&self, ev: &web::PointerEvent);
    fn moved(&self, ev: &web::PointerEvent);
    fn up(&self, ev: &web::PointerEvent);
    /// Capture lost or the browser cancelled the pointer.
    fn cancel(&self, ev: &web::PointerEvent);
}

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Listeners attached to one element; detached on drop.
pub struct PointerWiring {
    target: web::HtmlElement,
    listeners: Vec<(&'static str, PointerClosure)>,
}

impl PointerWiring {
    pub fn attach(target: &web::HtmlElement, gesture: Rc<dyn PointerGesture>) -> Self {
        let mut wiring = PointerWiring {
            target: target.clone(),
            listeners: Vec::with_capacity(5),
        };

        let gate = Rc::new(Cell::new(PointerGate::default()));

        let (g, el, gt) = (gesture.clone(), target.clone(), gate.clone());
        wiring.listen("pointerdown", move |ev| {
            let mut owner = gt.get();
            if !owner.press(ev.pointer_id()) {
                return;
            }
            gt.set(owner);
            _ = el.set_pointer_capture(ev.pointer_id());
            g.down(&ev);
            ev.prevent_default();
        });

        let (g, gt) = (gesture.clone(), gate.clone());
        wiring.listen("pointermove", move |ev| {
            if gt.get().accepts(ev.pointer_id()) {
                g.moved(&ev);
            }
        });

        let (g, el, gt) = (gesture.clone(), target.clone(), gate.clone());
        wiring.listen("pointerup", move |ev| {
            let mut owner = gt.get();
            if !owner.release(ev.pointer_id()) {
                return;
            }
            gt.set(owner);
            g.up(&ev);
            if el.has_pointer_capture(ev.pointer_id()) {
                _ = el.release_pointer_capture(ev.pointer_id());
            }
        });

        // Fires for cancellation and after pointerup; the latter finds the gate open
        let ended = {
            let (g, gt) = (gesture, gate);
            Rc::new(move |ev: web::PointerEvent| {
                let mut owner = gt.get();
                if owner.release(ev.pointer_id()) {
                    gt.set(owner);
                    g.cancel(&ev);
                }
            })
        };
        let e = ended.clone();
        wiring.listen("pointercancel", move |ev| e(ev));
        wiring.listen("lostpointercapture", move |ev| ended(ev));

        wiring
    }

    fn listen(&mut self, event: &'static str, handler: impl FnMut(web::PointerEvent) + 'static) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        _ = self
            .target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        self.listeners.push((event, closure));
    }

    pub fn detach(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for PointerWiring {
    fn drop(&mut self) {
        self.detach();
    }
}
