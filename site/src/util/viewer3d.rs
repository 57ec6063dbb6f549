//! 3D viewer orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives [`motion::sequence::LoadSequence`] against the real browser:
//! each directive maps to one async or DOM action here, and each outcome
//! feeds the next event back in. Every failure path funnels into the same
//! `ShowFallback` directive, so whatever breaks (offline CDN, no WebGL,
//! missing model) the hero region ends with the vector animation and the
//! page stays calm. On success the render loop, pointer parallax and the
//! smoke backdrop all start together.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, HtmlDivElement};

use motion::parallax::{self, PoseTween};
use motion::sequence::{Directive, LoadSequence, SequenceEvent};

use crate::config::SiteConfig;
use crate::ffi::three;
use crate::util::frame_loop::FrameLoop;
use crate::util::{fallback, script_loader, smoke};

// Scene framing. The camera looks slightly down at the model from front
// height; the ground plane exists only to catch a faint reflection tint.
const CAMERA_FOV_DEG: f64 = 40.0;
const CAMERA_POSITION: (f64, f64, f64) = (0.0, 1.3, 5.0);
const CAMERA_LOOK_AT: (f64, f64, f64) = (0.0, 0.6, 0.0);
const MODEL_SCALE: f64 = 1.6;
const MODEL_BASE_YAW_RAD: f64 = 0.5;
const GROUND_COLOR: u32 = 0x0b0e13;
const GROUND_OPACITY: f64 = 0.05;

/// Everything the boot chain needs, captured once at gate time.
#[derive(Clone)]
pub struct ViewerContext {
    /// Mount for the renderer canvas or the fallback.
    pub region: HtmlDivElement,
    /// Backdrop canvas for the smoke field.
    pub smoke: HtmlCanvasElement,
    pub config: SiteConfig,
    /// Touch-only devices never get pointer parallax.
    pub touch_only: bool,
}

/// Constructed scene pieces carried between directives.
struct SceneParts {
    renderer: three::WebGLRenderer,
    scene: three::Scene,
    camera: three::PerspectiveCamera,
}

/// Run the full boot chain: scripts, scene, model, then the live loops.
/// Infallible by design; failures degrade inside.
pub async fn run(ctx: ViewerContext) {
    let mut seq = LoadSequence::new();
    let mut parts: Option<(SceneParts, three::Object3D)> = None;

    let mut directive = seq.apply(SequenceEvent::Begin);
    loop {
        directive = match directive {
            Directive::LoadEngineScript => {
                match script_loader::load_script_once(&ctx.config.engine_src).await {
                    Ok(()) => seq.apply(SequenceEvent::EngineLoaded),
                    Err(err) => {
                        log::debug!("engine script failed: {err}");
                        seq.apply(SequenceEvent::EngineFailed)
                    }
                }
            }
            Directive::LoadLoaderScript => {
                match script_loader::load_script_once(&ctx.config.loader_src).await {
                    Ok(()) => seq.apply(SequenceEvent::LoaderLoaded),
                    Err(err) => {
                        log::debug!("loader script failed: {err}");
                        seq.apply(SequenceEvent::LoaderFailed)
                    }
                }
            }
            Directive::BuildScene => match build_scene(&ctx.region) {
                Ok(built) => match load_model(&ctx.config.model_src).await {
                    Ok(model) => {
                        parts = Some((built, model));
                        seq.apply(SequenceEvent::ModelLoaded)
                    }
                    Err(()) => {
                        log::debug!("model load failed: {}", ctx.config.model_src);
                        remove_renderer(&ctx.region, &built);
                        seq.apply(SequenceEvent::ModelFailed)
                    }
                },
                Err(err) => {
                    log::debug!("scene construction failed: {err:?}");
                    seq.apply(SequenceEvent::SceneFailed)
                }
            },
            Directive::Start => {
                if let Some((built, model)) = parts.take() {
                    start_running(&ctx, &built, &model);
                }
                break;
            }
            Directive::ShowFallback => {
                degrade(&ctx);
                break;
            }
            Directive::None => break,
        };
    }
}

/// Reduced-motion path: bypass loading entirely and show the fallback.
pub fn skip(ctx: &ViewerContext) {
    let mut seq = LoadSequence::new();
    if seq.apply(SequenceEvent::SkipToFallback) == Directive::ShowFallback {
        degrade(ctx);
    }
}

/// Put the vector fallback in place. Safe to reach from any failure path;
/// insertion is idempotent.
pub fn degrade(ctx: &ViewerContext) {
    match fallback::insert_fallback(&ctx.region, &ctx.config.fallback_src) {
        Ok(true) => log::debug!("viewer degraded to vector fallback"),
        Ok(false) => {}
        Err(err) => log::debug!("fallback insert failed: {err:?}"),
    }
}

/// Renderer, camera, lights and ground. The model is attached later, once
/// its fetch resolves.
fn build_scene(region: &HtmlDivElement) -> Result<SceneParts, JsValue> {
    let width = f64::from(region.client_width()).max(1.0);
    let height = f64::from(region.client_height()).max(1.0);

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"antialias".into(), &JsValue::TRUE)?;
    js_sys::Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
    let renderer = three::WebGLRenderer::new(&options)?;
    renderer.set_size(width, height);
    region.append_child(&renderer.dom_element())?;

    let scene = three::Scene::new();
    let camera = three::PerspectiveCamera::new(CAMERA_FOV_DEG, width / height, 0.1, 100.0);
    camera
        .position()
        .set(CAMERA_POSITION.0, CAMERA_POSITION.1, CAMERA_POSITION.2);
    camera.look_at(CAMERA_LOOK_AT.0, CAMERA_LOOK_AT.1, CAMERA_LOOK_AT.2);

    let ambient = three::AmbientLight::new(0xffffff, 0.8);
    scene.add(&ambient);
    let key = three::DirectionalLight::new(0xffffff, 1.5);
    key.position().set(3.0, 6.0, 4.0);
    scene.add(&key);

    let params = js_sys::Object::new();
    js_sys::Reflect::set(&params, &"color".into(), &JsValue::from(GROUND_COLOR))?;
    js_sys::Reflect::set(&params, &"transparent".into(), &JsValue::TRUE)?;
    js_sys::Reflect::set(&params, &"opacity".into(), &JsValue::from_f64(GROUND_OPACITY))?;
    let geometry = three::PlaneGeometry::new(30.0, 30.0);
    let material = three::MeshStandardMaterial::new(&params);
    let ground = three::Mesh::new(&geometry, &material);
    ground.rotation().set(-std::f64::consts::FRAC_PI_2, 0.0, 0.0);
    scene.add(&ground);

    Ok(SceneParts {
        renderer,
        scene,
        camera,
    })
}

/// Fetch the model through the loader extension. The error payload carries
/// nothing useful beyond "it failed", hence the unit error.
async fn load_model(url: &str) -> Result<three::Object3D, ()> {
    let loader = three::GLTFLoader::new();

    let (tx, rx) = oneshot::channel::<Result<three::Object3D, ()>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_ok = Rc::clone(&tx);
    let on_load = Closure::wrap(Box::new(move |gltf: JsValue| {
        let model = gltf.unchecked_into::<three::Gltf>().scene();
        if let Some(tx) = tx_ok.borrow_mut().take() {
            let _ = tx.send(Ok(model));
        }
    }) as Box<dyn FnMut(JsValue)>);
    let tx_err = Rc::clone(&tx);
    let on_error = Closure::wrap(Box::new(move |_err: JsValue| {
        if let Some(tx) = tx_err.borrow_mut().take() {
            let _ = tx.send(Err(()));
        }
    }) as Box<dyn FnMut(JsValue)>);

    loader.load(
        url,
        on_load.as_ref().unchecked_ref(),
        &JsValue::UNDEFINED,
        on_error.as_ref().unchecked_ref(),
    );
    on_load.forget();
    on_error.forget();

    rx.await.unwrap_or(Err(()))
}

/// A failed model fetch leaves no live surface behind.
fn remove_renderer(region: &HtmlDivElement, built: &SceneParts) {
    if region.remove_child(&built.renderer.dom_element()).is_err() {
        log::debug!("stale renderer canvas could not be removed");
    }
}

/// Success: attach the model and start the render loop, parallax and smoke.
fn start_running(ctx: &ViewerContext, built: &SceneParts, model: &three::Object3D) {
    built.scene.add(model);
    model.scale().set(MODEL_SCALE, MODEL_SCALE, MODEL_SCALE);
    model.position().set(0.0, 0.0, 0.0);
    model.rotation().set(0.0, MODEL_BASE_YAW_RAD, 0.0);

    // Shared between the pointer listener and the render loop.
    let pose = Rc::new(RefCell::new(PoseTween::new(0.0)));
    if ctx.touch_only {
        log::debug!("touch-only device; parallax disabled");
    } else {
        attach_parallax(&ctx.region, Rc::clone(&pose));
    }
    start_render_loop(ctx, built, model, pose);

    if let Err(err) = smoke::start(&ctx.smoke) {
        log::debug!("smoke backdrop failed to start: {err:?}");
    }
}

fn attach_parallax(region: &HtmlDivElement, pose: Rc<RefCell<PoseTween>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let region = region.clone();
    let cb = Closure::wrap(Box::new(move |ev: web_sys::PointerEvent| {
        let rect = region.get_bounding_client_rect();
        let center_x = rect.left() + rect.width() / 2.0;
        let center_y = rect.top() + rect.height() / 2.0;
        let target = parallax::target_pose(
            f64::from(ev.client_x()) - center_x,
            f64::from(ev.client_y()) - center_y,
            rect.width(),
            rect.height(),
        );
        // Event and frame timestamps share the same high-resolution clock.
        pose.borrow_mut().retarget(target, ev.time_stamp());
    }) as Box<dyn FnMut(web_sys::PointerEvent)>);
    if window
        .add_event_listener_with_callback("pointermove", cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::debug!("parallax listener attach failed");
    }
    cb.forget();
}

fn start_render_loop(
    ctx: &ViewerContext,
    built: &SceneParts,
    model: &three::Object3D,
    pose: Rc<RefCell<PoseTween>>,
) {
    let region = ctx.region.clone();
    let renderer = built.renderer.clone();
    let scene = built.scene.clone();
    let camera = built.camera.clone();
    let model = model.clone();
    FrameLoop::start(move |ts| {
        if !region.is_connected() {
            return false;
        }
        let p = pose.borrow().sample(ts);
        model.rotation().set(p.rot_x, MODEL_BASE_YAW_RAD + p.rot_y, 0.0);
        model.position().set(p.offset_x, p.offset_y, 0.0);
        if let Err(err) = renderer.render(&scene, &camera) {
            log::debug!("render call failed: {err:?}");
            return false;
        }
        true
    });
}
