use log::debug;

use crate::platform::{Window, WindowClient, WindowEvent, WindowTrait};
use crate::render::{rasterize, FrameBuffer};
use crate::texture::Texture;

/// The display loop's state machine. The only transition is
/// `Running -> Stopped` on a close event; `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Running,
    Stopped,
}

/// Owns the generated texture and the frame it is drawn into, and drives
/// the window until a close event arrives.
///
/// The loop body is the [`WindowClient`] impl, so it can be exercised
/// without a real display by feeding it events directly.
#[derive(Debug)]
pub struct Viewer {
    texture: Texture,
    scale: u32,
    frame: FrameBuffer,
    state: ViewerState,
    title: String,
}

impl Viewer {
    pub(crate) fn new(texture: Texture, scale: u32, title: String) -> Self {
        let frame = FrameBuffer::new(texture.width() * scale, texture.height() * scale);
        Self {
            texture,
            scale,
            frame,
            state: ViewerState::Running,
            title,
        }
    }

    #[inline]
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    #[inline]
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    #[inline]
    pub fn state(&self) -> ViewerState {
        self.state
    }

    /// Opens the window and blocks until the user closes it. Window
    /// creation failure is fatal.
    pub fn run(mut self) {
        let mut window = Window::new(self.frame.width(), self.frame.height(), &self.title);
        window.run(&mut self);
    }
}

impl WindowClient for Viewer {
    fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                debug!("close requested, stopping");
                self.state = ViewerState::Stopped;
            }
            // Everything else is drained but has no meaning here.
            WindowEvent::FocusChanged { .. } | WindowEvent::CursorMoved { .. } => {}
        }
    }

    fn frame(&mut self) -> bool {
        rasterize(&self.texture, self.scale, &mut self.frame);
        self.state == ViewerState::Running
    }

    fn pixels(&self) -> &[u8] {
        self.frame.pixels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewer() -> Viewer {
        Viewer::new(Texture::generate(4, 4, 42), 2, String::from("test"))
    }

    #[test]
    fn close_event_stops_within_one_iteration() {
        let mut viewer = test_viewer();
        assert_eq!(viewer.state(), ViewerState::Running);

        viewer.handle_event(WindowEvent::CloseRequested);
        assert_eq!(viewer.state(), ViewerState::Stopped);
        assert!(!viewer.frame());
    }

    #[test]
    fn non_close_events_are_ignored() {
        let mut viewer = test_viewer();
        viewer.handle_event(WindowEvent::FocusChanged { focused: false });
        viewer.handle_event(WindowEvent::CursorMoved { x: 3.0, y: 7.0 });
        assert_eq!(viewer.state(), ViewerState::Running);
        assert!(viewer.frame());
    }

    #[test]
    fn stopped_is_terminal() {
        let mut viewer = test_viewer();
        viewer.handle_event(WindowEvent::CloseRequested);
        viewer.handle_event(WindowEvent::FocusChanged { focused: true });
        assert_eq!(viewer.state(), ViewerState::Stopped);
        assert!(!viewer.frame());
        assert!(!viewer.frame());
    }

    #[test]
    fn repeated_frames_are_byte_identical() {
        let mut viewer = test_viewer();
        assert!(viewer.frame());
        let first = viewer.pixels().to_vec();
        assert!(viewer.frame());
        assert_eq!(viewer.pixels(), &first[..]);
    }

    #[test]
    fn frame_matches_texture_and_scale() {
        let viewer = test_viewer();
        assert_eq!(viewer.frame_buffer().width(), 8);
        assert_eq!(viewer.frame_buffer().height(), 8);
        assert_eq!(viewer.pixels().len(), 8 * 8 * 3);
    }
}
