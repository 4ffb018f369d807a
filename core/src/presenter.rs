//! Orchestration between user intents, the wire client and the view.
//!
//! # Design
//! `ItemPresenter` owns one `Transport` (one connection pool for the life of
//! the form) and one `ItemView`. Every operation runs build, execute, parse to
//! completion before returning. A successful mutation is followed by exactly
//! one full list refresh; the client never patches the displayed list
//! incrementally.
//!
//! Only `list` tells the user why it failed. Mutations show one generic
//! message per operation and log the underlying cause instead.
//!
//! There is no in-flight guard. Two shells sharing a server may interleave
//! refreshes; whichever response arrives last is what the view shows.

use tracing::{debug, info, warn};

use crate::client::{format_entry, ItemClient};
use crate::error::{ActionError, ApiError, FormError};
use crate::form::ItemForm;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Item, NewItem};
use crate::view::{ItemView, Notice};

type ParseFn = fn(&ItemClient, HttpResponse) -> Result<(), ApiError>;

pub struct ItemPresenter<T, V> {
    client: ItemClient,
    transport: T,
    view: V,
}

impl<T: Transport, V: ItemView> ItemPresenter<T, V> {
    pub fn new(client: ItemClient, transport: T, view: V) -> Self {
        Self {
            client,
            transport,
            view,
        }
    }

    pub fn client(&self) -> &ItemClient {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Fetch every item and replace the displayed list.
    ///
    /// On failure the display keeps its previous entries.
    pub fn list(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_items();
        let outcome = self
            .send(request)
            .and_then(|response| self.client.parse_list_items(response));

        match outcome {
            Ok(items) => {
                info!(count = items.len(), "item list refreshed");
                let entries = items.iter().map(format_entry).collect();
                self.view.show_entries(entries);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "item list refresh failed");
                self.view.notify(&Notice::ListFailed {
                    kind: err.list_failure(),
                    detail: err.to_string(),
                });
                Err(err)
            }
        }
    }

    pub fn create(&mut self, input: &NewItem) -> Result<(), ApiError> {
        let request = self.client.build_create_item(input);
        self.mutate(
            request,
            ItemClient::parse_create_item,
            Notice::Added,
            Notice::AddFailed,
        )
    }

    pub fn update(&mut self, id: i64, item: &Item) -> Result<(), ApiError> {
        let request = self.client.build_update_item(id, item);
        self.mutate(
            request,
            ItemClient::parse_update_item,
            Notice::Updated,
            Notice::UpdateFailed,
        )
    }

    pub fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        let request = Ok(self.client.build_delete_item(id));
        self.mutate(
            request,
            ItemClient::parse_delete_item,
            Notice::Deleted,
            Notice::DeleteFailed,
        )
    }

    pub fn add_from_form(&mut self, form: &ItemForm) -> Result<(), ActionError> {
        Ok(self.create(&form.to_new_item())?)
    }

    pub fn update_from_form(&mut self, form: &ItemForm) -> Result<(), ActionError> {
        let item = self.read_form(ItemForm::to_item, form)?;
        Ok(self.update(item.id, &item)?)
    }

    pub fn delete_from_form(&mut self, form: &ItemForm) -> Result<(), ActionError> {
        let id = self.read_form(ItemForm::parse_id, form)?;
        Ok(self.delete(id)?)
    }

    fn read_form<R>(
        &mut self,
        read: fn(&ItemForm) -> Result<R, FormError>,
        form: &ItemForm,
    ) -> Result<R, ActionError> {
        read(form).map_err(|err| {
            self.view.notify(&Notice::InvalidInput(err.to_string()));
            ActionError::from(err)
        })
    }

    fn mutate(
        &mut self,
        request: Result<HttpRequest, ApiError>,
        parse: ParseFn,
        done: Notice,
        failed: Notice,
    ) -> Result<(), ApiError> {
        let outcome = request
            .and_then(|request| self.send(request))
            .and_then(|response| parse(&self.client, response));

        match outcome {
            Ok(()) => {
                self.view.notify(&done);
                // A failed refresh reports itself.
                let _ = self.list();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, notice = %failed, "item mutation failed");
                self.view.notify(&failed);
                Err(err)
            }
        }
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
