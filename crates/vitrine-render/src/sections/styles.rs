//! Inline stylesheet for the landing page.

pub const LANDING_STYLES: &str = r#"
:root {
    --primary: #8b1538;
    --primary-dark: #6d102c;
    --gold: #d4af37;
    --text: #1f2937;
    --text-muted: #6b7280;
    --bg: #ffffff;
    --bg-alt: #fdf8f3;
    --whatsapp: #25d366;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    color: var(--text);
    background: var(--bg);
    line-height: 1.6;
}

.preloader {
    position: fixed;
    inset: 0;
    background: var(--bg);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
    transition: opacity 0.5s, visibility 0.5s;
}

.preloader.hidden { opacity: 0; visibility: hidden; }

.loader {
    width: 48px;
    height: 48px;
    border: 4px solid var(--bg-alt);
    border-top-color: var(--primary);
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.header {
    position: sticky;
    top: 0;
    background: rgba(255, 255, 255, 0.95);
    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
    padding: 15px 0;
    z-index: 100;
}

.nav {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo { font-size: 1.5rem; font-weight: 700; color: var(--primary); text-decoration: none; }
.nav-list { display: flex; gap: 2rem; list-style: none; }
.nav-link { color: var(--text); text-decoration: none; font-weight: 500; }
.nav-link:hover, .nav-link.active { color: var(--primary); }
.nav-toggle, .nav-close { display: none; background: none; border: none; font-size: 1.25rem; cursor: pointer; }

.hero {
    padding: 6rem 2rem;
    background: linear-gradient(135deg, var(--bg-alt) 0%, #fff 100%);
    text-align: center;
}

.hero-text h1 { font-size: 3rem; color: var(--primary); margin-bottom: 1rem; }
.hero-text p { font-size: 1.25rem; color: var(--text-muted); margin-bottom: 2rem; }

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 999px;
    text-decoration: none;
    font-weight: 600;
}

.btn-primary { background: var(--primary); color: #fff; }
.btn-primary:hover { background: var(--primary-dark); }
.btn-whatsapp { background: var(--whatsapp); color: #fff; }

.categories { padding: 6rem 2rem; }
.section-header { text-align: center; margin-bottom: 3rem; }
.section-header h2 { font-size: 2.5rem; color: var(--primary); }

.categories-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 3rem;
}

.category-card {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    background: #fff;
    border-radius: 16px;
    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.08);
    overflow: hidden;
    transition: transform 0.3s ease;
}

.category-card.reverse .category-image { order: 2; }

.category-image { position: relative; }
.category-image img { width: 100%; height: 100%; object-fit: cover; display: block; }

.category-overlay {
    position: absolute;
    inset: 0;
    background: rgba(139, 21, 56, 0.4);
    display: flex;
    align-items: center;
    justify-content: center;
    opacity: 0;
    transition: opacity 0.3s;
}

.category-card:hover .category-overlay { opacity: 1; }

.category-content { padding: 2rem; }
.category-icon { font-size: 2rem; color: var(--gold); margin-bottom: 1rem; }
.category-content h3 { font-size: 1.75rem; margin-bottom: 0.75rem; }
.category-content p { color: var(--text-muted); margin-bottom: 1rem; }
.category-features { list-style: none; margin-bottom: 1.5rem; }
.category-features li { padding: 0.25rem 0; }
.category-features .fa-check { color: var(--primary); }

.order-btn {
    display: inline-flex;
    gap: 0.5rem;
    color: var(--whatsapp);
    font-weight: 600;
    text-decoration: none;
}

.contact { padding: 4rem 2rem; background: var(--bg-alt); text-align: center; }
.contact-card h2 { margin-bottom: 1.5rem; color: var(--primary); }

.whatsapp-float {
    position: fixed;
    right: 24px;
    bottom: 24px;
    width: 56px;
    height: 56px;
    border-radius: 50%;
    background: var(--whatsapp);
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
}

@media (max-width: 768px) {
    .nav-toggle, .nav-close { display: block; }
    .nav-menu {
        position: fixed;
        top: 0;
        right: -100%;
        width: 75%;
        height: 100vh;
        background: #fff;
        padding: 4rem 2rem;
        transition: right 0.3s;
    }
    .nav-menu.active { right: 0; }
    .nav-list { flex-direction: column; }
    .hero-text h1 { font-size: 2.25rem; }
    .category-card { grid-template-columns: 1fr; }
    .category-card.reverse .category-image { order: 0; }
}
"#;
