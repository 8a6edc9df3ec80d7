pub const GLOBAL_CSS: &str = r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #1f2937;
    background: #ffffff;
    line-height: 1.6;
}

.header {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 80px;
    z-index: 1000;
    backdrop-filter: blur(10px);
    transition: background 0.3s ease, box-shadow 0.3s ease;
}

.nav-content {
    max-width: 1200px;
    height: 100%;
    margin: 0 auto;
    padding: 0 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-weight: 700;
    font-size: 1.25rem;
    color: #1e40af;
    text-decoration: none;
}

.nav {
    display: flex;
    gap: 2rem;
}

.nav a {
    color: #374151;
    text-decoration: none;
    font-weight: 500;
    transition: color 0.3s ease;
}

.nav a:hover {
    color: #1e40af;
}

.menu-toggle {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 8px;
}

.menu-toggle span {
    width: 25px;
    height: 3px;
    background: #1e40af;
    border-radius: 2px;
    transition: transform 0.3s ease, opacity 0.3s ease;
}

.menu-toggle.active span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.menu-toggle.active span:nth-child(2) { opacity: 0; }
.menu-toggle.active span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    color: #ffffff;
    text-align: center;
}

.hero-bg {
    position: absolute;
    inset: -10% 0 0 0;
    background: linear-gradient(135deg, #1e3a8a 0%, #1e40af 50%, #3b82f6 100%);
    z-index: -1;
}

.hero-content {
    max-width: 800px;
    padding: 0 2rem;
}

.hero-title {
    display: inline-block;
    font-size: 3.25rem;
    font-weight: 800;
    min-height: 1.2em;
    margin-bottom: 1.5rem;
}

.hero-subtitle {
    font-size: 1.2rem;
    opacity: 0.9;
    margin-bottom: 2.5rem;
}

.hero-buttons {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}

.btn {
    padding: 0.9rem 2rem;
    border-radius: 50px;
    border: 2px solid transparent;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.15s ease, background 0.3s ease;
}

.btn.primary {
    background: #1e40af;
    color: #ffffff;
}

.hero .btn.primary {
    background: #ffffff;
    color: #1e40af;
}

.btn.secondary {
    background: transparent;
    color: #ffffff;
    border-color: #ffffff;
}

.btn:disabled {
    cursor: default;
}

.section {
    padding: 6rem 2rem;
    max-width: 1200px;
    margin: 0 auto;
}

.section.alt {
    max-width: none;
    background: #f8fafc;
}

.section-title {
    text-align: center;
    font-size: 2.25rem;
    color: #111827;
    margin-bottom: 3rem;
}

.card-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
}

.about-card,
.program-card,
.faculty-card,
.research-item {
    background: #ffffff;
    border-radius: 16px;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
}

.about-card h3,
.program-card h3,
.faculty-card h3,
.research-item h3 {
    color: #1e40af;
    margin-bottom: 0.5rem;
}

.program-length,
.faculty-role {
    display: inline-block;
    font-size: 0.85rem;
    font-weight: 600;
    color: #6b7280;
    margin-bottom: 0.75rem;
}

.animate-text {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}

.animate-text.visible {
    opacity: 1;
    transform: translateY(0);
}

.contact-layout {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 3rem;
}

.contact-info p {
    margin-bottom: 1rem;
    color: #4b5563;
}

.form-group {
    margin-bottom: 1.25rem;
}

.contact-form input,
.contact-form textarea {
    width: 100%;
    padding: 0.9rem 1rem;
    border: 2px solid #e5e7eb;
    border-radius: 10px;
    font: inherit;
    transition: border-color 0.3s ease, box-shadow 0.3s ease;
}

.footer {
    text-align: center;
    padding: 2rem;
    background: #111827;
    color: #9ca3af;
}

.not-found {
    padding-top: 10rem;
    text-align: center;
}

@media (max-width: 768px) {
    .menu-toggle {
        display: flex;
    }

    .nav {
        position: fixed;
        top: 80px;
        left: 0;
        width: 100%;
        flex-direction: column;
        gap: 0;
        background: #ffffff;
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
        transform: translateY(-150%);
        transition: transform 0.3s ease;
    }

    .nav.active {
        transform: translateY(0);
    }

    .nav a {
        padding: 1rem 2rem;
        border-bottom: 1px solid #f3f4f6;
    }

    .hero-title {
        font-size: 2.25rem;
    }

    .contact-layout {
        grid-template-columns: 1fr;
    }
}
"#;
