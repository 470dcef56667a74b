use std::{thread, time};

use glfw::Context;

use crate::{
    error::HostError,
    platform::{WindowClient, WindowConfig, WindowEvent},
};

use super::Gl;

pub struct GLFWWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,

    tick_nanos: u128,
    max_ticks: Option<u64>,

    gl: Gl,
}

impl crate::platform::WindowTrait for GLFWWindow {
    fn new(config: &WindowConfig) -> Result<Self, HostError> {
        let WindowConfig {
            width,
            height,
            ref title,
            ..
        } = *config;
        if width == 0 || height == 0 {
            return Err(HostError::NoCubes);
        }

        let mut glfw = glfw::init(|error, description| {
            log::error!("glfw {error:?}: {description}");
        })
        .map_err(|err| HostError::Window(format!("{err:?}")))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .with_primary_monitor(|glfw, monitor| {
                let monitor_size = monitor
                    .and_then(|monitor| monitor.get_video_mode())
                    .map_or((480, 360), |mode| (mode.width, mode.height));

                let window_size = crate::platform::get_window_size(
                    width,
                    height,
                    monitor_size.0,
                    monitor_size.1,
                );

                glfw.create_window(
                    window_size.0 as u32,
                    window_size.1 as u32,
                    title,
                    glfw::WindowMode::Windowed,
                )
            })
            .ok_or_else(|| HostError::Window(String::from("failed to create GLFW window")))?;

        window.set_size_polling(true);
        window.set_close_polling(true);
        window.set_focus_polling(true);

        window.make_current();

        let mut gl = Gl::new(width, height, |s| window.get_proc_address(s) as _);

        let window_size = window.get_size();
        gl.recalculate_bounding_box(window_size.0 as _, window_size.1 as _);

        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        Ok(Self {
            glfw,
            window,
            events,

            tick_nanos: config.tick_nanos(),
            max_ticks: config.max_ticks,

            gl,
        })
    }

    fn window_dimensions(&self) -> (u32, u32) {
        let window_size = self.window.get_size();

        (window_size.0 as u32, window_size.1 as u32)
    }

    fn run<T>(&mut self, client: &mut T)
    where
        T: WindowClient,
    {
        let instant = time::Instant::now();
        let mut next_frame_time = instant.elapsed().as_nanos() + self.tick_nanos;

        loop {
            self.glfw.poll_events();

            for (_, glfw_event) in glfw::flush_messages(&self.events) {
                use glfw::WindowEvent as E;
                let event = match glfw_event {
                    E::Size(width, height) => {
                        self.gl.recalculate_bounding_box(width as u32, height as u32);
                        continue;
                    }
                    E::Close => WindowEvent::WindowClose,
                    E::Focus(focused) => WindowEvent::FocusChanged { focused },
                    other => {
                        log::warn!("ignoring window event {other:?}");
                        continue;
                    }
                };

                client.handle_event(event);
            }

            let cur_time = instant.elapsed().as_nanos();

            while cur_time >= next_frame_time {
                next_frame_time += self.tick_nanos;

                if self.max_ticks.map_or(false, |max| client.ticks() >= max) || !client.frame()
                {
                    return;
                }
            }

            if cur_time < next_frame_time {
                self.gl.draw(client.get_pixels());
                self.window.swap_buffers();

                thread::sleep(time::Duration::from_nanos(
                    (next_frame_time - cur_time) as u64,
                ));
            }
        }
    }
}

impl Drop for GLFWWindow {
    fn drop(&mut self) {
        self.gl.deinit();
    }
}
