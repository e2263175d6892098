use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use super::Locale;

/// `(key, en, de)`
const ENTRIES: &[(&str, &str, &str)] = &[
    // Common
    ("search", "Search", "Suchen"),
    ("actions", "Actions", "Aktionen"),
    // Navigation
    ("dashboard", "Dashboard", "Dashboard"),
    ("products", "Products", "Produkte"),
    ("orders", "Orders", "Bestellungen"),
    ("settings", "Settings", "Einstellungen"),
    // Dashboard
    ("totalSales", "Total Sales", "Gesamtumsatz"),
    ("pendingOrders", "Pending Orders", "Ausstehende Bestellungen"),
    ("lowStockAlerts", "Low Stock Alerts", "Warnungen zu niedrigem Bestand"),
    ("totalOrders", "Total Orders", "Bestellungen gesamt"),
    ("recentOrders", "Recent Orders", "Neueste Bestellungen"),
    ("dailySales", "Daily Sales", "Tagesumsatz"),
    // Products
    ("product", "Product", "Produkt"),
    ("addProduct", "Add Product", "Produkt hinzufügen"),
    ("editProduct", "Edit Product", "Produkt bearbeiten"),
    ("deleteProduct", "Delete Product", "Produkt löschen"),
    ("sku", "SKU", "Artikelnummer"),
    ("name", "Name", "Name"),
    ("category", "Category", "Kategorie"),
    ("price", "Price", "Preis"),
    ("inventory", "Inventory", "Bestand"),
    ("status", "Status", "Status"),
    ("lastUpdated", "Last Updated", "Zuletzt aktualisiert"),
    ("active", "Active", "Aktiv"),
    ("inactive", "Inactive", "Inaktiv"),
    ("allStatuses", "All Statuses", "Alle Status"),
    ("allStock", "All Stock", "Alle Bestände"),
    ("lowStock", "Low Stock", "Niedriger Bestand"),
    ("outOfStock", "Out of Stock", "Nicht verfügbar"),
    ("searchProducts", "Search products...", "Produkte suchen..."),
    ("noProductsFound", "No products found.", "Keine Produkte gefunden."),
    ("save", "Save", "Speichern"),
    ("cancel", "Cancel", "Abbrechen"),
    ("delete", "Delete", "Löschen"),
    (
        "confirmDelete",
        "Are you sure you want to delete this product?",
        "Sind Sie sicher, dass Sie dieses Produkt löschen möchten?",
    ),
    ("edit", "Edit", "Bearbeiten"),
    ("view", "View", "Ansehen"),
    ("activate", "Activate", "Aktivieren"),
    ("deactivate", "Deactivate", "Deaktivieren"),
    ("productAdded", "Product added successfully", "Produkt erfolgreich hinzugefügt"),
    ("productUpdated", "Product updated successfully", "Produkt erfolgreich aktualisiert"),
    ("productDeleted", "Product deleted successfully", "Produkt erfolgreich gelöscht"),
    // Orders
    ("order", "Order", "Bestellung"),
    ("orderNumber", "Order Number", "Bestellnummer"),
    ("customer", "Customer", "Kunde"),
    ("items", "Items", "Artikel"),
    ("total", "Total", "Gesamt"),
    ("date", "Date", "Datum"),
    ("pending", "Pending", "Ausstehend"),
    ("processing", "Processing", "In Bearbeitung"),
    ("shipped", "Shipped", "Versendet"),
    ("delivered", "Delivered", "Geliefert"),
    ("cancelled", "Cancelled", "Storniert"),
    ("searchOrders", "Search orders...", "Bestellungen suchen..."),
    ("noOrdersFound", "No orders found.", "Keine Bestellungen gefunden."),
    ("filterByStatus", "Filter by status", "Nach Status filtern"),
    ("markAsShipped", "Mark as Shipped", "Als versendet markieren"),
    ("markAsDelivered", "Mark as Delivered", "Als geliefert markieren"),
    ("viewDetails", "View Details", "Details anzeigen"),
    (
        "updateTracking",
        "Update Tracking Information",
        "Tracking-Informationen aktualisieren",
    ),
    ("trackingId", "Tracking ID", "Tracking-ID"),
    ("enterTrackingId", "Enter tracking ID", "Tracking-ID eingeben"),
    ("updateAndShip", "Update & Ship", "Aktualisieren & Versenden"),
    ("orderUpdated", "Order Updated", "Bestellung aktualisiert"),
    // Theme
    ("theme", "Theme", "Thema"),
    ("lightTheme", "Light", "Hell"),
    ("darkTheme", "Dark", "Dunkel"),
    // Pagination
    ("previous", "Previous", "Zurück"),
    ("next", "Next", "Weiter"),
    ("page", "Page", "Seite"),
    ("of", "of", "von"),
    // Language
    ("language", "Language", "Sprache"),
    ("english", "English", "Englisch"),
    ("german", "German", "Deutsch"),
];

struct Entry {
    en: &'static str,
    de: &'static str,
}

static TABLE: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(key, en, de)| (key, Entry { en, de }))
        .collect()
});

/// Looks up `key` for `locale`.
///
/// Unknown keys are logged and returned as-is so the UI shows the raw key
/// instead of failing.
pub fn translate(key: &str, locale: Locale) -> String {
    match lookup(key, locale) {
        Some(text) => text.to_string(),
        None => {
            warn!(key, %locale, "Translation key not found");
            key.to_string()
        }
    }
}

/// Looks up `key` without the missing-key fallback.
pub fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    TABLE.get(key).map(|entry| match locale {
        Locale::En => entry.en,
        Locale::De => entry.de,
    })
}

/// Every key in the table.
pub fn keys() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|&(key, _, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn translates_known_keys() {
        assert_eq!(translate("orders", Locale::En), "Orders");
        assert_eq!(translate("orders", Locale::De), "Bestellungen");
        assert_eq!(translate("outOfStock", Locale::De), "Nicht verfügbar");
    }

    #[test]
    fn missing_key_falls_back_to_the_key() {
        assert_eq!(translate("doesNotExist", Locale::De), "doesNotExist");
        assert_eq!(lookup("doesNotExist", Locale::En), None);
    }

    #[test]
    fn keys_are_unique() {
        let unique: HashSet<_> = keys().collect();
        assert_eq!(unique.len(), ENTRIES.len());
    }

    #[test]
    fn every_status_has_a_label() {
        use crate::models::{OrderStatus, ProductStatus};
        use strum::IntoEnumIterator;

        for status in OrderStatus::iter() {
            assert!(lookup(status.translation_key(), Locale::De).is_some());
        }
        for status in ProductStatus::iter() {
            assert!(lookup(status.translation_key(), Locale::En).is_some());
            assert!(lookup(status.toggle_action_key(), Locale::En).is_some());
        }
    }
}
