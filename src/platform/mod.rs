pub trait WindowTrait: Sized {
    fn new(width: u32, height: u32, title: &str) -> Self;

    fn run<T>(&mut self, client: &mut T)
    where
        T: WindowClient;
}

/// Receiver side of the display loop: the window delivers translated
/// events and asks for one frame per iteration. `frame` returning false
/// ends the loop.
pub trait WindowClient: Sized {
    fn handle_event(&mut self, event: WindowEvent);
    fn frame(&mut self) -> bool;
    fn pixels(&self) -> &[u8];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    CloseRequested,
    FocusChanged { focused: bool },
    CursorMoved { x: f64, y: f64 },
}

mod native;
pub type Window = native::GlfwWindow;
