//! Bindings to the `THREE` global and its GLTF loader extension.
//!
//! The engine arrives through a plain script tag at runtime, so these
//! bindings resolve against the global namespace at call time instead of
//! linking a bundled module; nothing here may be called before the engine
//! script's load event. Only the surface the viewer touches is bound.

#![allow(clippy::upper_case_acronyms, clippy::new_without_default)]

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Base scene-graph node. Everything placeable extends this.
    #[wasm_bindgen(js_namespace = THREE)]
    pub type Object3D;

    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method, getter)]
    pub fn rotation(this: &Object3D) -> Euler;

    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &Object3D) -> Vector3;

    #[wasm_bindgen(method, js_name = lookAt)]
    pub fn look_at(this: &Object3D, x: f64, y: f64, z: f64);

    #[wasm_bindgen(js_namespace = THREE)]
    pub type Vector3;

    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f64, y: f64, z: f64);

    #[wasm_bindgen(js_namespace = THREE)]
    pub type Euler;

    #[wasm_bindgen(method)]
    pub fn set(this: &Euler, x: f64, y: f64, z: f64);

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type Scene;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Scene;

    #[wasm_bindgen(method)]
    pub fn add(this: &Scene, object: &Object3D);

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type PerspectiveCamera;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> PerspectiveCamera;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type AmbientLight;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32, intensity: f64) -> AmbientLight;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type DirectionalLight;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32, intensity: f64) -> DirectionalLight;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type PlaneGeometry;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(width: f64, height: f64) -> PlaneGeometry;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type MeshStandardMaterial;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(parameters: &js_sys::Object) -> MeshStandardMaterial;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type Mesh;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(geometry: &PlaneGeometry, material: &MeshStandardMaterial) -> Mesh;

    /// The renderer constructor throws on WebGL-less environments, hence
    /// the fallible binding.
    #[wasm_bindgen(js_namespace = THREE)]
    pub type WebGLRenderer;

    #[wasm_bindgen(catch, constructor, js_namespace = THREE)]
    pub fn new(parameters: &js_sys::Object) -> Result<WebGLRenderer, JsValue>;

    #[wasm_bindgen(method, js_name = setSize)]
    pub fn set_size(this: &WebGLRenderer, width: f64, height: f64);

    #[wasm_bindgen(method, getter, js_name = domElement)]
    pub fn dom_element(this: &WebGLRenderer) -> web_sys::HtmlCanvasElement;

    #[wasm_bindgen(catch, method)]
    pub fn render(this: &WebGLRenderer, scene: &Scene, camera: &PerspectiveCamera)
    -> Result<(), JsValue>;

    /// Loader extension; attaches to the engine global from its own script.
    #[wasm_bindgen(js_namespace = THREE)]
    pub type GLTFLoader;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> GLTFLoader;

    #[wasm_bindgen(method)]
    pub fn load(
        this: &GLTFLoader,
        url: &str,
        on_load: &js_sys::Function,
        on_progress: &JsValue,
        on_error: &js_sys::Function,
    );

    /// The object handed to a successful load callback.
    pub type Gltf;

    #[wasm_bindgen(method, getter)]
    pub fn scene(this: &Gltf) -> Object3D;
}
