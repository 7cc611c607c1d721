use config::{ClassifierConfig, Config, Frontend};
use display::console_input::run_console_input;
use display::impl_console::SessionDisplayConsole;
use display::impl_gui::{run_gui, SessionDisplayGui};
use display::interface::SessionDisplay;
use image_source::blob_store::BlobStore;
use image_source::impl_http::ImageFetcherHttp;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use model_loader::impl_fake::ModelLoaderFake;
use model_loader::impl_tract::ModelLoaderTract;
use model_loader::interface::ModelLoader;
use session::main::Session;
use std::sync::{Arc, Mutex};

mod config;
mod display;
mod history;
mod image_classifier;
mod image_source;
mod inference;
mod library;
mod model_loader;
mod session;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let blob_store = BlobStore::new();

    let image_fetcher = Arc::new(ImageFetcherHttp::new(
        blob_store.clone(),
        config.fetch_timeout,
        logger.clone(),
    )?);

    let model_loader: Arc<dyn ModelLoader + Send + Sync> = match &config.classifier {
        ClassifierConfig::Fake { load_latency } => Arc::new(ModelLoaderFake::new(
            logger.clone(),
            *load_latency,
            config.top_k,
        )),
        ClassifierConfig::Onnx(model_config) => Arc::new(ModelLoaderTract::new(
            logger.clone(),
            model_config.clone(),
            config.top_k,
        )),
    };

    let gui_display = SessionDisplayGui::new();
    let display: Arc<Mutex<dyn SessionDisplay + Send + Sync>> = match config.frontend {
        Frontend::Gui => Arc::new(Mutex::new(gui_display.clone())),
        Frontend::Console => Arc::new(Mutex::new(SessionDisplayConsole::new())),
    };

    let session = Session::new(
        config.clone(),
        logger.clone(),
        display,
        model_loader,
        image_fetcher,
        blob_store,
    );
    let handle = session.handle();

    let runner = std::thread::spawn(move || session.run());

    match config.frontend {
        Frontend::Gui => {
            let result = run_gui(gui_display, handle.clone(), logger.clone());
            handle.shutdown();
            result?;
        }
        Frontend::Console => {
            run_console_input(&handle, std::io::stdin().lock(), logger.clone());
        }
    }

    runner
        .join()
        .map_err(|_| "session thread panicked")??;

    Ok(())
}
