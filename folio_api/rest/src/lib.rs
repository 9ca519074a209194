use std::{net::IpAddr, sync::Arc};

use axum::Router;
use folio_core_contact_contracts::ContactService;
use folio_templates_contracts::TemplateService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Templates> {
    contact: Contact,
    templates: Templates,
}

impl<Contact, Templates> RestServer<Contact, Templates>
where
    Contact: ContactService,
    Templates: TemplateService,
{
    pub fn new(contact: Contact, templates: Templates) -> Self {
        Self { contact, templates }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("listening on http://{}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let contact = Arc::new(self.contact);

        let router = Router::new()
            .merge(routes::pages::router(
                Arc::clone(&contact),
                self.templates.into(),
            ))
            .merge(routes::contact::router(contact));

        middlewares::trace::add(router)
    }
}
