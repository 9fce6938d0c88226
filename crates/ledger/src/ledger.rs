//! The ledger: single source of truth for committed invoices, the product
//! catalogue, customers and the seller profile.

use chrono::Datelike;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use fakturo_core::{
    Account, CostedInvoice, DomainError, DomainResult, Invoice, InvoiceId, InvoiceKind,
    InvoiceStatus, Product,
};

use crate::store::{KvStore, StoreError, collections};

impl From<StoreError> for DomainError {
    fn from(value: StoreError) -> Self {
        DomainError::persistence(value.to_string())
    }
}

/// Authoritative in-memory collections backed by a key-value store.
///
/// Lifecycle: `open(store)` loads all four collections in full; every
/// mutation rewrites its collection in full before returning (write-through,
/// not a transactional log); `close()` performs a final full persist and
/// hands the store back.
///
/// Mutations take `&mut self`, so number generation and record insertion
/// happen under one exclusive borrow - two successful `create_invoice` calls
/// can never observe the same sequence value. Callers sharing a ledger
/// across threads wrap it in a `Mutex` and hold the guard across the call.
#[derive(Debug)]
pub struct Ledger<S: KvStore> {
    store: S,
    invoices: Vec<Invoice>,
    products: Vec<Product>,
    customers: Vec<Account>,
    seller: Option<Account>,
}

impl<S: KvStore> Ledger<S> {
    /// Load all collections from the store.
    pub fn open(store: S) -> DomainResult<Self> {
        let invoices: Vec<Invoice> = load_collection(&store, collections::INVOICES)?;
        let products: Vec<Product> = load_collection(&store, collections::PRODUCTS)?;
        let customers: Vec<Account> = load_collection(&store, collections::CUSTOMERS)?;
        let seller = load_document::<Account>(&store, collections::SELLER)?;

        info!(
            invoices = invoices.len(),
            products = products.len(),
            customers = customers.len(),
            "ledger opened"
        );

        Ok(Self {
            store,
            invoices,
            products,
            customers,
            seller,
        })
    }

    /// Persist every collection and hand the store back.
    pub fn close(self) -> DomainResult<S> {
        self.persist(collections::INVOICES, &self.invoices)?;
        self.persist(collections::PRODUCTS, &self.products)?;
        self.persist(collections::CUSTOMERS, &self.customers)?;
        self.persist(collections::SELLER, &self.seller)?;
        info!("ledger closed");
        Ok(self.store)
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customers(&self) -> &[Account] {
        &self.customers
    }

    pub fn seller_profile(&self) -> Option<&Account> {
        self.seller.as_ref()
    }

    pub fn invoice(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    /// Commit a costed invoice under an idempotency key.
    ///
    /// Replaying a key returns the stored record unchanged: no recompute, no
    /// new identity, no second write. At most one invoice is ever created
    /// per key. A fresh commit assigns a UUIDv7 identity, the next gapless
    /// number for the issue year, Draft status, and a snapshot of the
    /// ledger's current seller profile (the draft's own seller is kept when
    /// no profile has been saved yet).
    pub fn create_invoice(
        &mut self,
        data: CostedInvoice,
        idempotency_key: &str,
    ) -> DomainResult<Invoice> {
        if idempotency_key.is_empty() {
            return Err(DomainError::missing_field("idempotency_key"));
        }

        if let Some(existing) = self
            .invoices
            .iter()
            .find(|i| i.idempotency_key == idempotency_key)
        {
            debug!(number = %existing.number, "idempotent replay, returning stored invoice");
            return Ok(existing.clone());
        }

        if data.kind == InvoiceKind::Full && data.buyer.tax_id.is_none() {
            return Err(DomainError::missing_field("buyer.tax_id"));
        }

        let mut costed = data;
        if let Some(seller) = &self.seller {
            costed.seller = seller.clone();
        }

        let number = self.next_invoice_number(costed.issue_date.year());
        let invoice = Invoice::draft(
            InvoiceId::new(),
            number,
            idempotency_key.to_string(),
            costed,
        );

        self.invoices.push(invoice.clone());
        if let Err(err) = self.persist(collections::INVOICES, &self.invoices) {
            // A failed write must not consume a sequence number.
            self.invoices.pop();
            return Err(err);
        }

        info!(number = %invoice.number, total = %invoice.grand_total, "invoice created");
        Ok(invoice)
    }

    /// Replace the status of the invoice with the given identity.
    ///
    /// Transitions follow `InvoiceStatus::can_transition_to`; repeating the
    /// current status is an idempotent no-op, an illegal transition is a
    /// `Conflict`. Invoices are never deleted, only voided through here.
    pub fn update_invoice_status(
        &mut self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> DomainResult<Invoice> {
        let idx = self
            .invoices
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(DomainError::not_found)?;

        let current = self.invoices[idx].status;
        if current == status {
            return Ok(self.invoices[idx].clone());
        }
        if !current.can_transition_to(status) {
            return Err(DomainError::conflict(format!(
                "illegal status transition {current:?} -> {status:?}"
            )));
        }

        self.invoices[idx].status = status;
        if let Err(err) = self.persist(collections::INVOICES, &self.invoices) {
            self.invoices[idx].status = current;
            return Err(err);
        }

        info!(number = %self.invoices[idx].number, ?status, "invoice status updated");
        Ok(self.invoices[idx].clone())
    }

    /// Append a product to the catalogue.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        self.products.push(product);
        if let Err(err) = self.persist(collections::PRODUCTS, &self.products) {
            self.products.pop();
            return Err(err);
        }
        debug!(products = self.products.len(), "product added");
        Ok(())
    }

    /// Append a customer profile.
    pub fn add_customer(&mut self, customer: Account) -> DomainResult<()> {
        self.customers.push(customer);
        if let Err(err) = self.persist(collections::CUSTOMERS, &self.customers) {
            self.customers.pop();
            return Err(err);
        }
        debug!(customers = self.customers.len(), "customer added");
        Ok(())
    }

    /// Replace the seller profile.
    ///
    /// Already-committed invoices keep their embedded snapshot; changing the
    /// profile never retroactively touches them.
    pub fn save_seller_profile(&mut self, profile: Account) -> DomainResult<()> {
        let previous = self.seller.replace(profile);
        if let Err(err) = self.persist(collections::SELLER, &self.seller) {
            self.seller = previous;
            return Err(err);
        }
        debug!("seller profile saved");
        Ok(())
    }

    /// Next number in `INV-{year}-{seq:04}` form.
    ///
    /// Scans the current year's prefix, takes the maximum parsed sequence
    /// and adds one. Per-year scoping means the sequence conceptually resets
    /// at the year boundary.
    fn next_invoice_number(&self, year: i32) -> String {
        let prefix = format!("INV-{year}-");
        let max_seq = self
            .invoices
            .iter()
            .filter_map(|i| i.number.strip_prefix(&prefix)?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{prefix}{:04}", max_seq + 1)
    }

    fn persist<T: Serialize>(&self, collection: &str, value: &T) -> DomainResult<()> {
        let doc = serde_json::to_value(value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.save(collection, &doc)?;
        debug!(collection, "collection persisted");
        Ok(())
    }
}

fn load_collection<T: DeserializeOwned>(
    store: &impl KvStore,
    collection: &str,
) -> DomainResult<Vec<T>> {
    match store.load(collection)? {
        Some(doc) => serde_json::from_value(doc)
            .map_err(|e| DomainError::persistence(format!("decode `{collection}`: {e}"))),
        None => Ok(Vec::new()),
    }
}

fn load_document<T: DeserializeOwned>(
    store: &impl KvStore,
    collection: &str,
) -> DomainResult<Option<T>> {
    match store.load(collection)? {
        Some(doc) if !doc.is_null() => serde_json::from_value(doc)
            .map(Some)
            .map_err(|e| DomainError::persistence(format!("decode `{collection}`: {e}"))),
        _ => Ok(None),
    }
}
