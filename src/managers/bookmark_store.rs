//! Bookmark Store for PlaceBook.
//!
//! Single owner of bookmark persistence. A dedicated writer task holds the
//! SQLite connection and the image store; every operation is queued as a
//! command over an mpsc channel and completes through a oneshot reply, so
//! writes apply strictly in submission order. After each successful
//! mutation the task republishes the full name-ordered bookmark list on a
//! watch channel that any number of subscribers can observe.

use image::DynamicImage;
use rusqlite::Connection;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, warn};

use crate::database::Database;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::services::image_store::ImageStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;
use crate::types::place::Place;

/// Commands accepted by the writer task.
enum StoreCommand {
    Add {
        bookmark: Bookmark,
        image: Option<DynamicImage>,
        reply: oneshot::Sender<Result<i64, BookmarkError>>,
    },
    Update {
        bookmark: Bookmark,
        reply: oneshot::Sender<Result<(), BookmarkError>>,
    },
    Delete {
        id: i64,
        reply: oneshot::Sender<Result<(), BookmarkError>>,
    },
    SetImage {
        id: i64,
        image: DynamicImage,
        reply: oneshot::Sender<Result<(), BookmarkError>>,
    },
    Get {
        id: i64,
        reply: oneshot::Sender<Result<Option<Bookmark>, BookmarkError>>,
    },
    All {
        reply: oneshot::Sender<Result<Vec<Bookmark>, BookmarkError>>,
    },
}

/// Pending commands allowed before senders start awaiting queue space.
const COMMAND_QUEUE_CAPACITY: usize = 64;

/// Cloneable handle to the bookmark store.
///
/// The writer task runs for as long as at least one handle exists; once the
/// last handle is dropped the command channel closes and the task drains
/// the queue and exits. Operations on a closed store return
/// [`BookmarkError::StoreClosed`].
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    command_tx: mpsc::Sender<StoreCommand>,
    snapshot_rx: watch::Receiver<Vec<Bookmark>>,
}

/// Follows a single bookmark through the store's snapshot stream.
#[derive(Debug, Clone)]
pub struct BookmarkWatcher {
    id: i64,
    snapshot_rx: watch::Receiver<Vec<Bookmark>>,
}

impl BookmarkStore {
    /// Opens the store on the given database, spawning the writer task.
    ///
    /// The initial snapshot is read synchronously so subscribers never
    /// observe an empty list that the database contradicts.
    pub fn open(db: Database, images: ImageStore) -> Self {
        let initial = {
            let manager = BookmarkManager::new(db.connection());
            manager.all().unwrap_or_else(|e| {
                error!(error = %e, "failed to read initial bookmark snapshot");
                Vec::new()
            })
        };
        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let conn = db.into_connection();
        tokio::spawn(run_store(conn, images, command_rx, snapshot_tx));
        BookmarkStore {
            command_tx,
            snapshot_rx,
        }
    }

    /// Inserts a new bookmark, optionally writing its image alongside.
    ///
    /// The bookmark must not carry an ID yet. An image write failure does
    /// not fail the insert; the bookmark is kept and the failure is logged.
    pub async fn add(
        &self,
        bookmark: Bookmark,
        image: Option<DynamicImage>,
    ) -> Result<i64, BookmarkError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::Add {
            bookmark,
            image,
            reply,
        })
        .await?;
        response.await.map_err(|_| BookmarkError::StoreClosed)?
    }

    /// Builds a bookmark from a fetched place and inserts it.
    ///
    /// Category is derived from the place's first type; the photo, when
    /// present, becomes the bookmark's stored image.
    pub async fn add_bookmark_from_place(
        &self,
        place: &Place,
        photo: Option<&DynamicImage>,
    ) -> Result<i64, BookmarkError> {
        let bookmark = Bookmark::from_place(place);
        self.add(bookmark, photo.cloned()).await
    }

    /// Persists changes to an existing bookmark and refreshes `updated_at`.
    pub async fn update(&self, bookmark: Bookmark) -> Result<(), BookmarkError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::Update { bookmark, reply }).await?;
        response.await.map_err(|_| BookmarkError::StoreClosed)?
    }

    /// Deletes a bookmark and its stored image.
    pub async fn delete(&self, id: i64) -> Result<(), BookmarkError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::Delete { id, reply }).await?;
        response.await.map_err(|_| BookmarkError::StoreClosed)?
    }

    /// Replaces the stored image for a bookmark.
    pub async fn set_image(&self, id: i64, image: DynamicImage) -> Result<(), BookmarkError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::SetImage { id, image, reply })
            .await?;
        response.await.map_err(|_| BookmarkError::StoreClosed)?
    }

    /// Fetches a single bookmark by ID.
    pub async fn get(&self, id: i64) -> Result<Option<Bookmark>, BookmarkError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::Get { id, reply }).await?;
        response.await.map_err(|_| BookmarkError::StoreClosed)?
    }

    /// Fetches all bookmarks ordered by name.
    pub async fn all(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::All { reply }).await?;
        response.await.map_err(|_| BookmarkError::StoreClosed)?
    }

    /// Subscribes to the full bookmark list.
    ///
    /// The receiver immediately holds the current snapshot and is notified
    /// for every successful mutation after this call. Dropping it
    /// unsubscribes.
    pub fn watch_all(&self) -> watch::Receiver<Vec<Bookmark>> {
        let mut rx = self.snapshot_rx.clone();
        rx.mark_unchanged();
        rx
    }

    /// Subscribes to a single bookmark's row within the snapshot stream.
    pub fn watch_bookmark(&self, id: i64) -> BookmarkWatcher {
        let mut rx = self.snapshot_rx.clone();
        rx.mark_unchanged();
        BookmarkWatcher {
            id,
            snapshot_rx: rx,
        }
    }

    async fn send(&self, command: StoreCommand) -> Result<(), BookmarkError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| BookmarkError::StoreClosed)
    }
}

impl BookmarkWatcher {
    /// The bookmark's current state, or `None` once it has been deleted.
    pub fn current(&self) -> Option<Bookmark> {
        self.snapshot_rx
            .borrow()
            .iter()
            .find(|b| b.id == Some(self.id))
            .cloned()
    }

    /// Waits for the next snapshot publication.
    pub async fn changed(&mut self) -> Result<(), BookmarkError> {
        self.snapshot_rx
            .changed()
            .await
            .map_err(|_| BookmarkError::StoreClosed)
    }
}

/// Writer task body. Owns the connection and the image store for the
/// lifetime of the store.
async fn run_store(
    conn: Connection,
    images: ImageStore,
    mut commands: mpsc::Receiver<StoreCommand>,
    snapshots: watch::Sender<Vec<Bookmark>>,
) {
    info!("bookmark store started");
    while let Some(command) = commands.recv().await {
        // The manager borrows the connection, so it must not live across
        // the channel await; build it per command instead.
        let mut manager = BookmarkManager::new(&conn);
        match command {
            StoreCommand::Add {
                mut bookmark,
                image,
                reply,
            } => match manager.insert(&mut bookmark) {
                Ok(id) => {
                    if let Some(image) = image {
                        if let Err(e) = images.save(id, &image) {
                            warn!(
                                bookmark_id = id,
                                error = %e,
                                "bookmark saved but image write failed"
                            );
                        }
                    }
                    debug!(bookmark_id = id, name = %bookmark.name, "bookmark added");
                    publish(&manager, &snapshots);
                    let _ = reply.send(Ok(id));
                }
                Err(e) => {
                    let _ = reply.send(Err(e));
                }
            },
            StoreCommand::Update { bookmark, reply } => {
                let result = manager.update(&bookmark);
                if result.is_ok() {
                    debug!(bookmark_id = ?bookmark.id, "bookmark updated");
                    publish(&manager, &snapshots);
                }
                let _ = reply.send(result);
            }
            StoreCommand::Delete { id, reply } => {
                let result = manager.delete(id);
                if result.is_ok() {
                    if let Err(e) = images.delete(id) {
                        warn!(bookmark_id = id, error = %e, "bookmark image removal failed");
                    }
                    debug!(bookmark_id = id, "bookmark deleted");
                    publish(&manager, &snapshots);
                }
                let _ = reply.send(result);
            }
            StoreCommand::SetImage { id, image, reply } => {
                let result = images
                    .save(id, &image)
                    .map_err(|e| BookmarkError::ImageWrite(e.to_string()));
                let _ = reply.send(result);
            }
            StoreCommand::Get { id, reply } => {
                let _ = reply.send(manager.get(id));
            }
            StoreCommand::All { reply } => {
                let _ = reply.send(manager.all());
            }
        }
    }
    info!("bookmark store stopped");
}

/// Re-reads the ordered bookmark list and pushes it to subscribers.
fn publish(manager: &BookmarkManager, snapshots: &watch::Sender<Vec<Bookmark>>) {
    match manager.all() {
        Ok(bookmarks) => {
            // send_replace so publication succeeds even with no subscribers.
            snapshots.send_replace(bookmarks);
        }
        Err(e) => error!(error = %e, "failed to refresh bookmark snapshot"),
    }
}
