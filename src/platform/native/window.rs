use glfw::Context;
use log::info;

use crate::platform::{WindowClient, WindowTrait};

use super::Gl;

pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,

    gl: Gl,
}

impl WindowTrait for GlfwWindow {
    fn new(width: u32, height: u32, title: &str) -> Self {
        let mut glfw = glfw::init(|error, description| {
            glfw::fail_on_errors(error, description);
        })
        .expect("failed to create GLFW instance");

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        // The window is exactly the rasterized frame, one texel per pixel.
        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .expect("failed to create GLFW window");

        window.set_close_polling(true);
        window.set_focus_polling(true);
        window.set_cursor_pos_polling(true);

        window.make_current();
        let gl = Gl::new(width, height, |s| window.get_proc_address(s) as _);

        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        info!("opened {width}x{height} window");

        Self {
            glfw,
            window,
            events,

            gl,
        }
    }

    fn run<T>(&mut self, client: &mut T)
    where
        T: WindowClient,
    {
        loop {
            self.glfw.poll_events();

            for (_, glfw_event) in glfw::flush_messages(&self.events) {
                use crate::platform::WindowEvent as W;
                use glfw::WindowEvent as E;
                let event = match glfw_event {
                    E::Close => W::CloseRequested,
                    E::Focus(focused) => W::FocusChanged { focused },
                    E::CursorPos(x, y) => W::CursorMoved { x, y },
                    _ => continue,
                };

                client.handle_event(event);
            }

            if !client.frame() {
                return;
            }

            self.gl.draw(client.pixels());
            self.window.swap_buffers();
        }
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        self.gl.deinit();
    }
}
