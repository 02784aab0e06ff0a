use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{block_on, IoTaskPool, Task};
use std::sync::Arc;

mod error;
mod source;

pub use error::CaptionError;
pub use source::{CaptionSource, HttpCaption, StaticCaption, DEFAULT_URL};

/// Fetches the caption once at startup, off the main thread, and stores it in [`Caption`]
/// when it arrives. Frames keep rendering in the meantime.
pub struct CaptionPlugin {
    pub source: Arc<dyn CaptionSource>,
}

impl Default for CaptionPlugin {
    fn default() -> Self {
        Self {
            source: Arc::new(HttpCaption::default()),
        }
    }
}

impl Plugin for CaptionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Caption>()
            .insert_resource(CaptionProvider(self.source.clone()))
            .init_resource::<Caption>()
            .add_systems(Startup, start_fetch)
            .add_systems(Update, poll_fetch.run_if(resource_exists::<PendingCaption>));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Resource, Reflect)]
#[reflect(Resource)]
pub struct Caption {
    pub text: String,
    pub resolved: bool,
}

#[derive(Resource, Deref)]
struct CaptionProvider(Arc<dyn CaptionSource>);

#[derive(Resource)]
struct PendingCaption(Task<String>);

/// Trimmed caption text, or an empty string when the source fails.
///
/// A byte order mark counts as whitespace.
pub fn resolve(source: &dyn CaptionSource) -> String {
    match source.fetch() {
        Ok(text) => text
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .to_string(),
        Err(err) => {
            warn!("Error fetching caption: {err}");
            String::new()
        }
    }
}

fn start_fetch(mut commands: Commands, provider: Res<CaptionProvider>) {
    let source = Arc::clone(&provider);
    let task = IoTaskPool::get().spawn(async move { resolve(&*source) });
    commands.insert_resource(PendingCaption(task));
}

fn poll_fetch(
    mut commands: Commands,
    mut pending: ResMut<PendingCaption>,
    mut caption: ResMut<Caption>,
) {
    let Some(text) = block_on(future::poll_once(&mut pending.0)) else {
        return;
    };
    info!("Caption resolved ({} bytes)", text.len());
    *caption = Caption {
        text,
        resolved: true,
    };
    commands.remove_resource::<PendingCaption>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::Duration;

    struct Garbled;

    impl CaptionSource for Garbled {
        fn fetch(&self) -> Result<String, CaptionError> {
            Err(CaptionError::NonText(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )))
        }
    }

    fn run_until_resolved(source: impl CaptionSource) -> Caption {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            CaptionPlugin {
                source: Arc::new(source),
            },
        ));
        for _ in 0..500 {
            app.update();
            if app.world().resource::<Caption>().resolved {
                break;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        app.world().resource::<Caption>().clone()
    }

    #[test]
    fn fetched_text_is_trimmed() {
        let source = StaticCaption(" © 2024 Example ".to_string());
        assert_eq!(resolve(&source), "© 2024 Example");
    }

    #[test]
    fn failed_fetch_is_empty() {
        assert_eq!(resolve(&Garbled), "");
    }

    /// Serves a single raw HTTP response on a local port and returns its URL.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0; 1024];
            let _ = stream.read(&mut request);
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/main.txt")
    }

    #[test]
    fn leading_byte_order_mark_is_dropped() {
        let source = StaticCaption("\u{feff}© 2024 Example\n".to_string());
        assert_eq!(resolve(&source), "© 2024 Example");
    }

    #[test]
    fn http_body_is_fetched() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 16\r\n\
             Connection: close\r\n\r\n © 2024 Orrery\n",
        );
        assert_eq!(resolve(&HttpCaption::new(url)), "© 2024 Orrery");
    }

    #[test]
    fn error_status_body_is_shown() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 9\r\n\
             Connection: close\r\n\r\nNot Found",
        );
        assert_eq!(resolve(&HttpCaption::new(url)), "Not Found");
    }

    #[test]
    fn unreachable_host_is_empty() {
        // Nothing listens on the discard port.
        let source = HttpCaption::new("http://127.0.0.1:9/main.txt");
        assert_eq!(resolve(&source), "");
    }

    #[test]
    fn plugin_publishes_caption() {
        let caption = run_until_resolved(StaticCaption("\n  hello  \n".to_string()));
        assert_eq!(
            caption,
            Caption {
                text: "hello".to_string(),
                resolved: true,
            }
        );
    }

    #[test]
    fn plugin_publishes_empty_caption_on_failure() {
        let caption = run_until_resolved(Garbled);
        assert!(caption.resolved);
        assert_eq!(caption.text, "");
    }
}
