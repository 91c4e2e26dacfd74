use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::WindowId,
};

use flyview::cli::Cli;
use flyview::input::scroll_lines;
use flyview::renderer::GridRenderer;
use flyview::{UniformSink, ViewConfig, ViewController, ViewError, WinitController, WinitHost};

struct App {
    title: String,
    view: ViewController,
    keys: WinitController,
    renderer: Option<GridRenderer>,
    input_window: Option<WindowId>,
    /// Error that stopped the event loop, reported once `run_app` returns
    fatal: Option<ViewError>,
}

impl App {
    fn new(config: ViewConfig, title: String) -> Self {
        Self {
            title,
            view: ViewController::new(config),
            keys: WinitController::new(),
            renderer: None,
            input_window: None,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewError) {
        log::error!("{error}");
        self.fatal = Some(error);
        event_loop.exit();
    }

    /// Outcome of the run once the event loop has returned
    fn finish(self) -> anyhow::Result<()> {
        match self.fatal {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let sink = self.renderer.as_mut().map(|r| r as &mut dyn UniformSink);
        self.view.prepare_frame(&self.keys, sink);

        if self.view.should_close() {
            event_loop.exit();
            return;
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match renderer.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, ViewError::Renderer("surface out of memory".to_string()));
            }
            Err(e) => log::warn!("Render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.view.window().is_some() {
            return;
        }

        let mut host = WinitHost::new(event_loop);
        let window = match self.view.create_display_window(&mut host, &self.title) {
            Ok(window) => window,
            Err(e) => {
                // The host has already been terminated
                self.fatal = Some(e);
                return;
            }
        };
        self.input_window = host.input_window();

        match pollster::block_on(GridRenderer::new(window, host.alpha_blending())) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                self.view.reset_clock();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        self.keys.process_event(&event);
        let routed = self.input_window == Some(window_id);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } if routed => {
                self.view.on_mouse_move(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } if routed => {
                self.view.on_scroll(scroll_lines(&delta));
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.view.window() {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ViewConfig::load(path)
            .with_context(|| format!("loading view config {}", path.display()))?,
        None => ViewConfig::default(),
    };
    cli.apply(&mut config);
    config.validate().context("checking view config")?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = App::new(config, cli.title.clone());

    log::info!("Controls: WASD move, Q/E up/down, mouse look, wheel speed, 1/2 ortho/perspective, Escape quits");
    event_loop.run_app(&mut app).context("running event loop")?;

    app.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(ViewConfig::default(), "Test".to_string())
    }

    #[test]
    fn clean_run_finishes_ok() {
        assert!(app().finish().is_ok());
    }

    #[test]
    fn window_creation_failure_is_reported() {
        let mut app = app();
        app.fatal = Some(ViewError::WindowCreation("no display available".to_string()));

        let err = app.finish().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ViewError>(),
            Some(ViewError::WindowCreation(_))
        ));
    }

    #[test]
    fn renderer_failure_is_reported() {
        let mut app = app();
        app.fatal = Some(ViewError::Renderer("no suitable adapter".to_string()));

        let err = app.finish().unwrap_err();
        assert!(err.to_string().contains("no suitable adapter"));
    }
}
