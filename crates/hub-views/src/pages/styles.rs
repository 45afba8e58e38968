/// Inline stylesheet shared by every page.
pub const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f9fafb; color: #111827; }
a { color: inherit; }
.page { max-width: 1152px; margin: 0 auto; padding: 2rem 1rem; min-height: 60vh; }

/* Navbar */
.site-header { background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.navbar { max-width: 1152px; margin: 0 auto; padding: 1rem; display: flex; align-items: center; gap: 2rem; }
.brand-logo { font-size: 1.5rem; font-weight: bold; color: #2563eb; text-decoration: none; }
.nav-links { display: flex; gap: 1.5rem; }
.nav-link { text-decoration: none; color: #374151; }
.nav-search input { padding: 0.5rem 1rem; border: 1px solid #d1d5db; border-radius: 9999px; }
.nav-actions { margin-left: auto; display: flex; gap: 0.5rem; }
.btn-icon { background: none; border: none; cursor: pointer; color: #374151; }

/* Hero */
.hero { background: #2563eb; color: white; text-align: center; padding: 4rem 1rem; }
.hero h1 { font-size: 3rem; margin: 0 0 1rem 0; }
.hero p { font-size: 1.25rem; color: #dbeafe; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; }
.btn-primary { background: white; color: #2563eb; border: none; padding: 0.75rem 1.5rem; border-radius: 6px; }
.btn-outline { background: transparent; color: white; border: 2px solid white; padding: 0.75rem 1.5rem; border-radius: 6px; }
.section-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem; }
.sort-options { display: flex; gap: 0.75rem; }

/* Product grid */
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.product-list--refreshing .product-grid { opacity: 0.6; }
.product-card { background: white; border-radius: 8px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.1); display: flex; flex-direction: column; }
.product-card-media { position: relative; height: 12rem; background: #f3f4f6; }
.product-card-image { width: 100%; height: 100%; object-fit: cover; }
.product-card-placeholder { display: flex; align-items: center; justify-content: center; height: 100%; color: #9ca3af; }
.badge-low-stock { position: absolute; top: 0.5rem; right: 0.5rem; background: #ef4444; color: white; font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 4px; }
.product-card-body { padding: 1rem; display: flex; flex-direction: column; flex: 1; }
.product-card-header { display: flex; justify-content: space-between; gap: 0.5rem; }
.product-card-title { font-size: 1.1rem; margin: 0; }
.product-card-description { color: #4b5563; font-size: 0.875rem; overflow: hidden; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; }
.product-card-meta { font-size: 0.75rem; color: #6b7280; display: flex; gap: 0.25rem; }
.product-card-footer { margin-top: auto; display: flex; align-items: center; gap: 0.5rem; }
.btn-view-details { margin-left: auto; background: #2563eb; color: white; padding: 0.5rem 0.75rem; border-radius: 6px; text-decoration: none; font-size: 0.875rem; }

/* Prices and ratings */
.price-current { font-size: 1.25rem; font-weight: bold; }
.price-original { text-decoration: line-through; color: #6b7280; font-size: 0.875rem; }
.price-savings { background: #dcfce7; color: #166534; padding: 0.25rem 0.5rem; border-radius: 4px; font-size: 0.875rem; }
.star-filled { color: #facc15; }
.star-empty { color: #d1d5db; }

/* Pagination */
.pagination { display: flex; justify-content: space-between; align-items: center; margin-top: 2rem; }
.pagination button { padding: 0.5rem 1rem; border-radius: 6px; border: 1px solid #d1d5db; background: white; }
.pagination button[disabled] { opacity: 0.5; cursor: not-allowed; }

/* Loading and errors */
.spinner { width: 1.5rem; height: 1.5rem; border: 3px solid #bfdbfe; border-top-color: #2563eb; border-radius: 50%; animation: spin 1s linear infinite; margin: 1rem auto; }
.spinner-large { width: 4rem; height: 4rem; margin: 4rem auto; }
@keyframes spin { to { transform: rotate(360deg); } }
.error-panel { background: #fef2f2; color: #b91c1c; padding: 1.5rem; border-radius: 8px; text-align: center; }
.error-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 1rem; }

/* Product detail */
.breadcrumb { font-size: 0.875rem; color: #6b7280; margin-bottom: 1rem; }
.product-detail { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; background: white; padding: 2rem; border-radius: 8px; }
.gallery-main { width: 100%; aspect-ratio: 1; object-fit: contain; background: #f3f4f6; border-radius: 8px; }
.gallery-thumbnails { display: flex; gap: 0.5rem; margin-top: 1rem; }
.gallery-thumbnail { width: 64px; height: 64px; border: 2px solid transparent; border-radius: 4px; padding: 0; background: none; }
.gallery-thumbnail--active { border-color: #2563eb; }
.gallery-thumbnail img { width: 100%; height: 100%; object-fit: cover; }
.stock-available { color: #15803d; }
.stock-low { color: #c2410c; }
.stock-out { color: #b91c1c; }
.quantity-stepper { display: inline-flex; align-items: center; border: 1px solid #d1d5db; border-radius: 6px; }
.quantity-stepper button { width: 2.5rem; border: none; background: none; }
.quantity-stepper input { width: 3.5rem; text-align: center; border: none; }
.btn-add-to-cart { background: #2563eb; color: white; border: none; padding: 0.75rem 1.5rem; border-radius: 6px; }
.detail-tabs { margin-top: 2rem; background: white; border-radius: 8px; padding: 1.5rem; }
.tab-list { display: flex; gap: 1.5rem; border-bottom: 1px solid #e5e7eb; }
.tab { background: none; border: none; padding: 0.75rem 0; color: #6b7280; }
.tab--active { color: #2563eb; border-bottom: 2px solid #2563eb; }
.specs-table { width: 100%; border-collapse: collapse; }
.specs-table th { text-align: left; color: #6b7280; font-weight: normal; padding: 0.5rem 0; width: 40%; }
.review { border-bottom: 1px solid #e5e7eb; padding: 1rem 0; }
.sentiment-positive { color: #15803d; }
.sentiment-neutral { color: #a16207; }
.sentiment-negative { color: #b91c1c; }

/* Footer */
.site-footer { background: #f3f4f6; padding: 3rem 1rem 1.5rem; margin-top: 3rem; }
.footer-grid { max-width: 1152px; margin: 0 auto; display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
.footer-column ul { list-style: none; padding: 0; }
.footer-column a { text-decoration: none; color: #4b5563; font-size: 0.875rem; }
.footer-bottom { max-width: 1152px; margin: 2rem auto 0; padding-top: 1.5rem; border-top: 1px solid #e5e7eb; display: flex; justify-content: space-between; font-size: 0.875rem; color: #4b5563; }
.legal-links { display: flex; gap: 1rem; font-size: 0.75rem; }
"#;
