//! Browser runtime around `AppState`: canvas, renderer, input, animation
//! frames and network requests.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlCanvasElement, MouseEvent};

use cellulelife_engine::fetch::{get_json, post_json};
use cellulelife_engine::input::{GridMapper, InputEvent, InputQueue};
use cellulelife_engine::quad::QuadInstance;
use cellulelife_engine::renderer::QuadRenderer;

use crate::bridge::with_app;
use crate::components::{BASE_CELLULE_SIZE, CANVAS_ID};
use crate::host::HostContext;
use crate::scores::{ResultResponse, ScoresResponse};
use crate::state::{AppState, NetRequest};

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct App {
    pub state: AppState,
    canvas: HtmlCanvasElement,
    input: Rc<RefCell<InputQueue>>,
    mapper: GridMapper,
    renderer: Option<QuadRenderer>,
    _on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl App {
    /// Find the board canvas, size it to the board and start listening for
    /// clicks. The renderer is attached later, once the GPU is ready.
    pub fn new(ctx: HostContext) -> Result<Self, JsValue> {
        // Animation-frame timestamps count from page load.
        let state = AppState::new(ctx, 0.0);
        let grid = state.grid();
        let mapper = GridMapper::new(grid.width, grid.height, BASE_CELLULE_SIZE);

        let canvas = find_canvas(CANVAS_ID)?;
        let (board_width, board_height) = mapper.board_size();
        canvas.set_width(board_width as u32);
        canvas.set_height(board_height as u32);

        let input = Rc::new(RefCell::new(InputQueue::new()));
        let queue = Rc::clone(&input);
        let target = canvas.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            queue.borrow_mut().push(InputEvent::PointerDown {
                x: event.offset_x() as f32,
                y: event.offset_y() as f32,
                client_width: target.client_width() as f32,
                client_height: target.client_height() as f32,
            });
        });
        canvas.set_onclick(Some(on_click.as_ref().unchecked_ref()));

        Ok(App {
            state,
            canvas,
            input,
            mapper,
            renderer: None,
            _on_click: on_click,
        })
    }

    /// Create the GPU renderer in the background and hand it to the running
    /// app when ready. Until then frames are simulated but not drawn.
    pub fn spawn_renderer(&self) {
        let canvas = self.canvas.clone();
        let (width, height) = (canvas.width(), canvas.height());
        spawn_local(async move {
            match QuadRenderer::new(canvas, width, height).await {
                Ok(renderer) => with_app(|app| app.attach_renderer(renderer)),
                Err(err) => log::error!("renderer unavailable: {err}"),
            }
        });
    }

    fn attach_renderer(&mut self, mut renderer: QuadRenderer) {
        let (board_width, board_height) = self.mapper.board_size();
        renderer.camera.fit(
            self.canvas.width() as f32,
            self.canvas.height() as f32,
            board_width,
            board_height,
        );
        renderer.update_camera();
        log::info!("renderer ready");
        self.renderer = Some(renderer);
    }

    /// One animation frame.
    pub fn frame(&mut self, now_ms: f64) {
        let events = self.input.borrow_mut().drain();
        for event in events {
            if let Some((column, row)) = self.mapper.map_event(&event) {
                self.state.grid_clicked(column, row);
            }
        }

        self.state.tick(now_ms);

        for request in self.state.drain_requests() {
            dispatch(request);
        }

        self.draw();
    }

    fn draw(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let quads: &[QuadInstance] = bytemuck::cast_slice(self.state.render_buffer());
        match renderer.render(quads) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(self.canvas.width(), self.canvas.height());
            }
            Err(err) => log::warn!("frame dropped: {err:?}"),
        }
    }
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{id}`")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("`{id}` is not a canvas")))
}

/// Run each queued request in the background and feed the outcome back.
fn dispatch(request: NetRequest) {
    match request {
        NetRequest::FetchScores { url } => spawn_local(async move {
            match get_json::<ScoresResponse>(&url).await {
                Ok(response) => with_app(|app| app.state.scores_loaded(response.scores)),
                Err(err) => with_app(|app| app.state.scores_unavailable(&err.to_string())),
            }
        }),
        NetRequest::SubmitResult { url, payload } => spawn_local(async move {
            match post_json::<_, ResultResponse>(&url, &payload).await {
                Ok(response) => with_app(|app| app.state.result_submitted(response)),
                Err(err) => log::warn!("result submission failed: {err}"),
            }
        }),
    }
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Drive `App::frame` from `requestAnimationFrame` for the rest of the page's
/// lifetime.
pub fn start_frame_loop() -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);

    *callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        with_app(|app| app.frame(now_ms));
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                log::error!("frame loop stopped: {err:?}");
            }
        }
    }));

    match callback.borrow().as_ref() {
        Some(callback) => request_animation_frame(callback).map(|_| ()),
        None => Ok(()),
    }
}
