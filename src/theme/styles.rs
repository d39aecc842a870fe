//! Global CSS styles for Folio.
//!
//! Light theme by default; the `.app.dark` class flips the custom
//! properties. Injected once from the root component.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f7f8fa;
  --surface: #ffffff;
  --border: #e3e6ea;
  --text: #1c2330;
  --text-muted: rgba(28, 35, 48, 0.65);

  --accent: #3b82f6;
  --accent-hover: #2563eb;
  --accent-soft: rgba(59, 130, 246, 0.12);

  --radius: 10px;
  --shadow: 0 6px 24px rgba(15, 23, 42, 0.08);
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

.app.dark {
  --bg: #10141a;
  --surface: #171c24;
  --border: #262d38;
  --text: #eef1f5;
  --text-muted: rgba(238, 241, 245, 0.65);
  --shadow: 0 6px 24px rgba(0, 0, 0, 0.45);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
  background: var(--bg);
  color: var(--text);
}

.app {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  transition: background var(--transition-normal), color var(--transition-normal);
}

main {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

section {
  padding: 4.5rem 0 2rem;
}

.section-title {
  font-size: 1.6rem;
  margin-bottom: 1.25rem;
}

/* === Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.nav-header-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0.9rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.site-title {
  font-size: 1.25rem;
  letter-spacing: 0.02em;
}

.menu {
  display: flex;
  gap: 1.25rem;
}

.menu-link {
  color: var(--text-muted);
  text-decoration: none;
  font-size: 0.95rem;
  padding-bottom: 2px;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.menu-link:hover,
.menu-link.active {
  color: var(--text);
  border-bottom-color: var(--accent);
}

.nav-controls {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.theme-toggle,
.hamburger {
  background: none;
  border: 1px solid var(--border);
  border-radius: 50%;
  width: 2.25rem;
  height: 2.25rem;
  color: var(--text);
  font-size: 1rem;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.theme-toggle:hover,
.hamburger:hover {
  border-color: var(--accent);
}

.hamburger {
  display: none;
}

.mobile-menu {
  display: none;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.mobile-menu-link {
  display: block;
  padding: 0.8rem 1.5rem;
  color: var(--text);
  text-decoration: none;
  border-bottom: 1px solid var(--border);
}

/* === Hero === */
.hero {
  text-align: center;
  padding-top: 6rem;
}

.hero-title {
  font-size: 2.4rem;
  margin-bottom: 0.75rem;
}

.hero-subtitle {
  color: var(--text-muted);
  margin-bottom: 1.75rem;
}

/* === About === */
.about p {
  color: var(--text-muted);
  max-width: 640px;
  line-height: 1.7;
}

/* === Buttons === */
.btn {
  display: inline-block;
  border-radius: var(--radius);
  padding: 0.55rem 1.2rem;
  font-size: 0.9rem;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: #ffffff;
}

.btn-primary:hover {
  background: var(--accent-hover);
}

.btn-outline {
  background: none;
  border: 1px solid var(--accent);
  color: var(--accent);
}

.btn-outline:hover {
  background: var(--accent-soft);
}

/* === Filter Bar === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.75rem;
}

.filter-btn {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.4rem 1rem;
  color: var(--text-muted);
  font-size: 0.85rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.filter-btn:hover {
  border-color: var(--accent);
  color: var(--text);
}

.filter-btn.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #ffffff;
}

/* === Project Grid === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(290px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  box-shadow: var(--shadow);
}

.project-thumb img {
  width: 100%;
  height: 180px;
  object-fit: cover;
  display: block;
}

.project-body {
  padding: 1.1rem;
}

.project-body h3 {
  font-size: 1.05rem;
  margin-bottom: 0.5rem;
}

.project-body p {
  color: var(--text-muted);
  font-size: 0.9rem;
  line-height: 1.55;
  margin-bottom: 1rem;
}

.project-actions {
  display: flex;
  gap: 0.6rem;
}

/* === Scroll Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 500ms ease, transform 500ms ease;
}

.reveal.show {
  opacity: 1;
  transform: translateY(0);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(8, 12, 18, 0.6);
  padding: 1.5rem;
}

.modal-content {
  position: relative;
  background: var(--surface);
  border-radius: var(--radius);
  max-width: 560px;
  width: 100%;
  max-height: 85vh;
  overflow-y: auto;
  padding: 1.5rem;
  box-shadow: var(--shadow);
}

.modal-close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: 1.4rem;
  cursor: pointer;
}

.modal-close:hover {
  color: var(--text);
}

.modal-image {
  width: 100%;
  height: 240px;
  object-fit: cover;
  border-radius: var(--radius);
  margin-bottom: 1rem;
}

.modal-content h3 {
  margin-bottom: 0.6rem;
}

.modal-content p {
  color: var(--text-muted);
  line-height: 1.6;
  margin-bottom: 1rem;
}

.modal-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-bottom: 1.25rem;
}

.modal-tags span {
  background: var(--accent-soft);
  color: var(--accent);
  border-radius: 999px;
  padding: 0.25rem 0.7rem;
  font-size: 0.8rem;
}

.modal-actions {
  display: flex;
  gap: 0.6rem;
}

/* === Contact === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
  max-width: 520px;
}

.contact-input {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.65rem 0.9rem;
  color: var(--text);
  font: inherit;
}

.contact-input:focus {
  outline: none;
  border-color: var(--accent);
}

.contact-ack {
  color: var(--accent);
  font-size: 0.9rem;
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--border);
  margin-top: 3rem;
  padding: 1.5rem;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Scroll To Top === */
.scroll-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 60;
  width: 2.6rem;
  height: 2.6rem;
  border-radius: 50%;
  border: none;
  background: var(--accent);
  color: #ffffff;
  font-size: 1.1rem;
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.scroll-top.show {
  opacity: 1;
  pointer-events: auto;
}

/* === Responsive === */
@media (max-width: 768px) {
  .menu {
    display: none;
  }

  .hamburger {
    display: block;
  }

  .mobile-menu {
    display: block;
  }

  .hero-title {
    font-size: 1.8rem;
  }
}
"#;
