use crate::core::constants::{BACKDROP_BASE_DARK, BACKDROP_BASE_LIGHT};
use crate::core::settings::css_url;
use crate::core::{SharedContext, ThemeMode, Variant};
use crate::dom;
use crate::frame::{GlassLayer, LayerOpacity};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn base_color(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => BACKDROP_BASE_DARK,
        ThemeMode::Light => BACKDROP_BASE_LIGHT,
    }
}

struct Layers {
    ctx: SharedContext,
    base: web::HtmlElement,
    image: web::HtmlElement,
}

impl Layers {
    fn refresh(&self) {
        dom::set_styles(&self.base, &[("background", base_color(self.ctx.mode()))]);
        match self.ctx.glass().active_background_image() {
            Some(reference) => {
                let url = css_url(reference);
                dom::set_styles(
                    &self.image,
                    &[("background-image", url.as_str()), ("display", "block")],
                );
            }
            None => dom::set_styles(
                &self.image,
                &[("background-image", "none"), ("display", "none")],
            ),
        }
    }
}

/// Full-page stack: base color, optional custom image, classic glass field.
pub struct Backdrop {
    _layers: Rc<Layers>,
    _glass: GlassLayer,
}

impl Backdrop {
    pub async fn mount(
        ctx: SharedContext,
        document: &web::Document,
        host: &web::HtmlElement,
    ) -> Option<Backdrop> {
        let fill = [
            ("position", "absolute"),
            ("inset", "0"),
            ("pointer-events", "none"),
        ];
        let base = dom::create_element(document, "div", "backdrop-base")?;
        let image = dom::create_element(document, "div", "backdrop-image")?;
        let canvas = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        canvas.set_class_name("backdrop-glass");
        dom::set_styles(&base, &fill);
        dom::set_styles(&image, &fill);
        dom::set_styles(
            &image,
            &[
                ("background-size", "cover"),
                ("background-position", "center"),
            ],
        );
        dom::set_styles(&canvas, &fill);
        dom::set_styles(&canvas, &[("width", "100%"), ("height", "100%")]);
        _ = host.append_child(&base);
        _ = host.append_child(&image);
        _ = host.append_child(&canvas);

        let layers = Rc::new(Layers {
            ctx: ctx.clone(),
            base,
            image,
        });
        layers.refresh();
        ctx.follow(&layers, Layers::refresh);

        let glass = GlassLayer::mount(ctx, canvas, Variant::Classic, LayerOpacity::Backdrop).await;
        log::info!("[frame] backdrop mounted");
        Some(Backdrop {
            _layers: layers,
            _glass: glass,
        })
    }
}
