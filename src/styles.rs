pub const GLOBAL: &str = r#"
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        min-height: 100vh;
        color: #fff;
        background: linear-gradient(135deg, #0f172a 0%, #581c87 50%, #0f172a 100%);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        overflow-x: hidden;
    }
    a { color: inherit; text-decoration: none; }

    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        transition: background 0.3s ease;
    }
    .top-nav.scrolled { background: rgba(0, 0, 0, 0.2); backdrop-filter: blur(12px); }
    .nav-content {
        max-width: 1280px;
        margin: 0 auto;
        height: 64px;
        padding: 0 24px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-right { display: flex; gap: 32px; }
    .nav-link { color: #d1d5db; }
    .nav-link:hover { color: #fff; }
    .burger-menu { display: none; background: none; border: none; }
    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
    .brand-mark {
        display: inline-flex;
        width: 32px;
        height: 32px;
        margin-right: 8px;
        align-items: center;
        justify-content: center;
        border-radius: 8px;
        background: linear-gradient(90deg, #a855f7, #ec4899);
        font-weight: bold;
    }

    .gradient-text {
        display: block;
        background: linear-gradient(90deg, #c084fc, #f472b6, #60a5fa);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero, .page-hero {
        position: relative;
        padding: 96px 24px 64px;
        text-align: center;
    }
    .hero { min-height: 100vh; display: flex; align-items: center; justify-content: center; }
    .hero-title { font-size: clamp(3rem, 8vw, 6rem); line-height: 1.1; }
    .hero-subtitle, .page-hero p { max-width: 48rem; margin: 0 auto; color: #d1d5db; font-size: 1.25rem; }
    .hero-buttons { display: flex; gap: 16px; justify-content: center; margin-top: 32px; }
    .hero-content.revealed > * { opacity: 1 !important; }
    .floating { animation: float 3s ease-in-out infinite alternate; }
    @keyframes float { to { transform: translateY(-20px); } }
    .orb { position: absolute; border-radius: 50%; filter: blur(24px); opacity: 0.2; }
    .orb-left { top: 25%; left: 40px; width: 80px; height: 80px; background: #a855f7; }
    .orb-right { bottom: 25%; right: 40px; width: 128px; height: 128px; background: #3b82f6; }
    .orb-center { top: 50%; right: 25%; width: 64px; height: 64px; background: #ec4899; }

    .button {
        display: inline-block;
        padding: 12px 32px;
        border-radius: 8px;
        border: 1px solid transparent;
        font-size: 1.1rem;
        cursor: pointer;
    }
    .button.primary { background: linear-gradient(90deg, #a855f7, #ec4899); color: #fff; }
    .button.outline { border-color: #c084fc; color: #c084fc; background: transparent; }
    .button.small { padding: 6px 16px; font-size: 0.9rem; }
    .button.wide { width: 100%; }

    .features, .projects-preview, .skills, .stats, .contact-grid, .projects-grid {
        max-width: 1280px;
        margin: 0 auto;
        padding: 80px 24px;
    }
    .section-heading { text-align: center; margin-bottom: 64px; }
    .section-action { text-align: center; margin-top: 48px; }
    .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 32px; perspective: 1000px; }
    .feature-card, .project-card, .panel, .stat {
        position: relative;
        padding: 32px;
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .project-image { height: 192px; border-radius: 12px; margin-bottom: 16px; }
    .blue-purple { background: linear-gradient(90deg, #3b82f6, #a855f7); }
    .purple-pink { background: linear-gradient(90deg, #a855f7, #ec4899); }
    .pink-orange { background: linear-gradient(90deg, #ec4899, #f97316); }
    .green-blue { background: linear-gradient(90deg, #22c55e, #3b82f6); }
    .cyan-blue { background: linear-gradient(90deg, #06b6d4, #3b82f6); }
    .purple-indigo { background: linear-gradient(90deg, #a855f7, #6366f1); }
    .tags { display: flex; flex-wrap: wrap; gap: 8px; }
    .tag { padding: 4px 12px; border-radius: 9999px; background: rgba(255, 255, 255, 0.1); font-size: 0.85rem; }

    .skill-label { display: flex; justify-content: space-between; }
    .skill-bar { height: 8px; border-radius: 9999px; background: rgba(255, 255, 255, 0.1); margin: 8px 0 24px; }
    .skill-fill { height: 100%; border-radius: 9999px; background: linear-gradient(90deg, #a855f7, #ec4899); }
    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 32px; text-align: center; }
    .stat-number { font-size: 2.5rem; font-weight: bold; }

    .contact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 48px; }
    .contact-form label { display: block; margin-bottom: 24px; color: #d1d5db; }
    .contact-form input, .contact-form textarea {
        display: block;
        width: 100%;
        margin-top: 8px;
        padding: 10px;
        border-radius: 8px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.1);
        color: #fff;
    }
    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }

    .footer { border-top: 1px solid rgba(255, 255, 255, 0.1); padding: 48px 24px; }
    .footer-grid { max-width: 1280px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 32px; }
    .footer ul { list-style: none; padding: 0; color: #9ca3af; }
    .social-links { display: flex; gap: 16px; }
    .footer-bottom { text-align: center; margin-top: 32px; color: #9ca3af; }

    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 64px;
            left: 0;
            right: 0;
            padding: 24px;
            background: rgba(0, 0, 0, 0.8);
        }
        .form-row, .footer-grid { grid-template-columns: 1fr; }
    }
"#;
