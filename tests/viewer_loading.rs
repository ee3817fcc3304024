use std::time::Duration;

use tempfile::TempDir;
use tokio::sync::mpsc;

use job_board_rust::config::ViewerConfig;
use job_board_rust::event::{AppEvent, Event};
use job_board_rust::widgets::page_viewer::{PageLoader, PageViewer, SurfaceContent, ViewerIntent};

fn write_page(dir: &TempDir, name: &str, width: u32, height: u32) {
    image::RgbImage::new(width, height)
        .save(dir.path().join(name))
        .unwrap();
}

/// Feed loader results back into the viewer until it settles on `page`.
async fn settle(viewer: &mut PageViewer, rx: &mut mpsc::UnboundedReceiver<Event>, page: usize) {
    let wait = async {
        while !viewer.content().is_settled_for(page) {
            match rx.recv().await {
                Some(Event::App(AppEvent::PageLoaded(load))) => {
                    viewer.on_loaded(load);
                }
                Some(_) => {}
                None => break,
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(10), wait)
        .await
        .expect("viewer did not settle");
}

#[tokio::test]
async fn test_failed_page_two_never_overwrites_page_three() {
    let dir = TempDir::new().unwrap();
    write_page(&dir, "1.png", 40, 60);
    // page 2 is missing on disk
    write_page(&dir, "3.png", 30, 90);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let loader = PageLoader::new(dir.path(), tx);
    let urls = vec!["/1.png".to_string(), "/2.png".to_string(), "/3.png".to_string()];
    let mut viewer = PageViewer::new("pdf-0", urls, &ViewerConfig::default(), loader);

    viewer.mount();
    viewer.apply(ViewerIntent::NextPage);
    viewer.apply(ViewerIntent::NextPage);
    settle(&mut viewer, &mut rx, 2).await;

    match viewer.content() {
        SurfaceContent::Ready { page_index, image } => {
            assert_eq!(*page_index, 2);
            assert_eq!((image.width(), image.height()), (30, 90));
        }
        other => panic!("expected page 3 to be shown, got {other:?}"),
    }

    // Nothing that arrives later may replace it
    tokio::time::sleep(Duration::from_millis(50)).await;
    while let Ok(Event::App(AppEvent::PageLoaded(load))) = rx.try_recv() {
        assert!(!viewer.on_loaded(load));
    }
    assert!(viewer.content().is_settled_for(2));
}

#[tokio::test]
async fn test_failure_then_navigation_recovers() {
    let dir = TempDir::new().unwrap();
    write_page(&dir, "2.png", 20, 20);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let loader = PageLoader::new(dir.path(), tx);
    let urls = vec!["/missing.png".to_string(), "/2.png".to_string()];
    let mut viewer = PageViewer::new("pdf-1", urls, &ViewerConfig::default(), loader);

    viewer.mount();
    settle(&mut viewer, &mut rx, 0).await;
    assert!(matches!(viewer.content(), SurfaceContent::Failed { page_index: 0, .. }));

    viewer.apply(ViewerIntent::NextPage);
    settle(&mut viewer, &mut rx, 1).await;
    assert!(matches!(viewer.content(), SurfaceContent::Ready { page_index: 1, .. }));
}

#[tokio::test]
async fn test_dropping_viewer_cancels_load() {
    let dir = TempDir::new().unwrap();
    write_page(&dir, "1.png", 10, 10);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let loader = PageLoader::new(dir.path(), tx.clone());
    let mut viewer = PageViewer::new("pdf-2", vec!["/1.png".into()], &ViewerConfig::default(), loader);
    viewer.mount();
    drop(viewer);
    drop(tx);

    // The aborted task never reports back; the channel just closes.
    let next = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
    assert!(next.is_none());
}
