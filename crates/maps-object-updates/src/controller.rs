//! Keeps the platform's view of every overlay kind in sync with the
//! collections declared by the application.

use maps_object::{
    Circle, CircleId, MapsObject, Marker, MarkerId, ObjectId, Polygon, PolygonId, Polyline, PolylineId,
    TileOverlay, TileOverlayId,
};
use tracing::debug;

use crate::channel::MethodChannel;
use crate::snapshot::Snapshot;
use crate::{ControllerError, ZipOptions};

/// Tracks the last snapshot sent for each object kind and forwards the
/// difference to a [`MethodChannel`] whenever a new snapshot is declared.
///
/// Each `update_*` call sends one `"{kind}s#update"` message (for example
/// `"markers#update"`) carrying the update set's JSON, or nothing when the
/// snapshot did not change. The stored snapshot is only replaced once the
/// channel accepted the message, so a failed send is retried as part of the
/// next update.
#[derive(Debug)]
pub struct MapObjectsController<C> {
    channel: C,
    markers: Snapshot<Marker>,
    polygons: Snapshot<Polygon>,
    polylines: Snapshot<Polyline>,
    circles: Snapshot<Circle>,
    tile_overlays: Snapshot<TileOverlay>,
}

impl<C: MethodChannel> MapObjectsController<C> {
    pub fn new(channel: C) -> Self {
        Self::with_options(channel, ZipOptions::default())
    }

    pub fn with_options(channel: C, options: ZipOptions) -> Self {
        Self {
            channel,
            markers: Snapshot::new(options.clone()),
            polygons: Snapshot::new(options.clone()),
            polylines: Snapshot::new(options.clone()),
            circles: Snapshot::new(options.clone()),
            tile_overlays: Snapshot::new(options),
        }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Returns whether a message was sent.
    pub fn update_markers(&mut self, markers: Vec<Marker>) -> Result<bool, ControllerError> {
        send_updates(&mut self.channel, &mut self.markers, markers)
    }

    pub fn update_polygons(&mut self, polygons: Vec<Polygon>) -> Result<bool, ControllerError> {
        send_updates(&mut self.channel, &mut self.polygons, polygons)
    }

    pub fn update_polylines(&mut self, polylines: Vec<Polyline>) -> Result<bool, ControllerError> {
        send_updates(&mut self.channel, &mut self.polylines, polylines)
    }

    pub fn update_circles(&mut self, circles: Vec<Circle>) -> Result<bool, ControllerError> {
        send_updates(&mut self.channel, &mut self.circles, circles)
    }

    pub fn update_tile_overlays(&mut self, tile_overlays: Vec<TileOverlay>) -> Result<bool, ControllerError> {
        send_updates(&mut self.channel, &mut self.tile_overlays, tile_overlays)
    }

    pub fn markers(&self) -> &[Marker] {
        self.markers.objects()
    }

    pub fn polygons(&self) -> &[Polygon] {
        self.polygons.objects()
    }

    pub fn polylines(&self) -> &[Polyline] {
        self.polylines.objects()
    }

    pub fn circles(&self) -> &[Circle] {
        self.circles.objects()
    }

    pub fn tile_overlays(&self) -> &[TileOverlay] {
        self.tile_overlays.objects()
    }

    /// Look up a marker the platform reported, e.g. in a tap callback.
    pub fn marker(&self, id: &MarkerId) -> Result<&Marker, ControllerError> {
        lookup(&self.markers, id)
    }

    pub fn polygon(&self, id: &PolygonId) -> Result<&Polygon, ControllerError> {
        lookup(&self.polygons, id)
    }

    pub fn polyline(&self, id: &PolylineId) -> Result<&Polyline, ControllerError> {
        lookup(&self.polylines, id)
    }

    pub fn circle(&self, id: &CircleId) -> Result<&Circle, ControllerError> {
        lookup(&self.circles, id)
    }

    pub fn tile_overlay(&self, id: &TileOverlayId) -> Result<&TileOverlay, ControllerError> {
        lookup(&self.tile_overlays, id)
    }
}

fn send_updates<C, T>(channel: &mut C, snapshot: &mut Snapshot<T>, current: Vec<T>) -> Result<bool, ControllerError>
where
    C: MethodChannel,
    T: MapsObject,
{
    let updates = snapshot.diff(&current);
    if updates.is_empty() {
        debug!(kind = T::KIND, "snapshot unchanged, nothing to send");
        snapshot.replace(current);
        return Ok(false);
    }
    let method = format!("{}s#update", T::KIND);
    channel.invoke_method(&method, updates.to_json()?)?;
    debug!(
        %method,
        add = updates.objects_to_add().len(),
        change = updates.objects_to_change().len(),
        remove = updates.object_ids_to_remove().len(),
        "sent object updates"
    );
    snapshot.replace(current);
    Ok(true)
}

fn lookup<'a, T: MapsObject>(snapshot: &'a Snapshot<T>, id: &ObjectId<T>) -> Result<&'a T, ControllerError> {
    snapshot.get(id).ok_or_else(|| ControllerError::UnknownObjectId {
        kind: T::KIND,
        id: id.value().to_owned(),
    })
}
