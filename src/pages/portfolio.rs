use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::hooks::use_scroll_spy;
use crate::sections::{
    about::About, education::Education, experience::Experience, expertise::Expertise, hero::Hero,
    projects::Projects,
};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let spy = use_scroll_spy();

    html! {
        <div class="portfolio-page">
            <NavBar
                active_section={spy.state.active_section}
                is_scrolled={spy.state.is_scrolled}
                on_navigate={spy.scroll_to.clone()}
            />
            <Hero on_navigate={spy.scroll_to.clone()} />
            <Expertise />
            <Experience />
            <About />
            <Projects />
            <Education />
            <Footer on_navigate={spy.scroll_to.clone()} />
            <style>
                {r#"
                    .portfolio-page {
                        background: #f8fafc;
                        min-height: 100vh;
                        color: #1e293b;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .portfolio-page h1,
                    .portfolio-page h2,
                    .portfolio-page h3,
                    .portfolio-page h4 {
                        margin: 0;
                    }

                    /* Nav */
                    .top-nav {
                        position: fixed;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.05em;
                        color: #1e3a8a;
                        cursor: pointer;
                    }
                    .logo-dot {
                        color: #2563eb;
                    }
                    .nav-links {
                        display: flex;
                        gap: 0.25rem;
                    }
                    .nav-link {
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: #4b5563;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #2563eb;
                        background: #eff6ff;
                    }
                    .nav-link.active {
                        background: #2563eb;
                        color: white;
                        box-shadow: 0 10px 15px rgba(37, 99, 235, 0.3);
                    }
                    .nav-contact-button {
                        background: #0f172a;
                        color: white;
                        border: none;
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }
                    .nav-contact-button:hover {
                        background: #2563eb;
                    }

                    /* Shared */
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-inner.narrow {
                        max-width: 64rem;
                    }
                    .section-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #0f172a;
                        text-align: center;
                        margin-bottom: 3rem !important;
                    }
                    .tag-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .tag {
                        padding: 0.25rem 0.5rem;
                        font-size: 0.75rem;
                        font-weight: 500;
                        border-radius: 0.25rem;
                    }
                    .pill {
                        padding: 0.25rem 0.75rem;
                        background: #334155;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                    }
                    .image-placeholder {
                        width: 100%;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #94a3b8;
                        text-align: center;
                        padding: 1rem;
                        box-sizing: border-box;
                    }
                    .placeholder-icon {
                        font-size: 2.25rem;
                        margin-bottom: 0.5rem;
                    }

                    /* Hero */
                    .hero-section {
                        padding: 10rem 1.5rem 8rem;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-badge {
                        display: inline-block;
                        background: #dbeafe;
                        color: #1d4ed8;
                        padding: 0.375rem 1rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        font-size: 0.875rem;
                        letter-spacing: 0.025em;
                    }
                    .hero-text h1 {
                        font-size: 4.5rem;
                        font-weight: 800;
                        color: #0f172a;
                        line-height: 1.1;
                        margin: 2rem 0;
                    }
                    .gradient-text {
                        background: linear-gradient(to right, #2563eb, #4f46e5);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-summary {
                        font-size: 1.25rem;
                        color: #475569;
                        max-width: 36rem;
                        line-height: 1.6;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .primary-button {
                        background: #2563eb;
                        color: white;
                        border: none;
                        padding: 0.875rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        cursor: pointer;
                        box-shadow: 0 20px 25px rgba(37, 99, 235, 0.2);
                    }
                    .primary-button:hover {
                        background: #1d4ed8;
                    }
                    .secondary-button {
                        background: white;
                        color: #334155;
                        border: 1px solid #e2e8f0;
                        padding: 0.875rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .hero-socials,
                    .footer-socials {
                        display: flex;
                        gap: 1.5rem;
                        padding-top: 1rem;
                    }
                    .hero-socials a {
                        color: #64748b;
                        text-decoration: none;
                    }
                    .hero-socials a:hover {
                        color: #2563eb;
                    }
                    .headshot-wrapper {
                        display: flex;
                        justify-content: flex-end;
                    }
                    .headshot-frame {
                        position: relative;
                        width: 24rem;
                        height: 24rem;
                    }
                    .headshot-shape {
                        position: absolute;
                        inset: 0;
                        border-radius: 2rem;
                        opacity: 0.1;
                    }
                    .headshot-shape.tilt-right {
                        background: #2563eb;
                        transform: rotate(6deg);
                    }
                    .headshot-shape.tilt-left {
                        background: #4f46e5;
                        transform: rotate(-6deg);
                    }
                    .headshot-card {
                        position: absolute;
                        inset: 0;
                        background: white;
                        padding: 0.5rem;
                        border-radius: 2rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .headshot-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        transition: transform 0.5s ease;
                    }
                    .headshot-card:hover .headshot-image {
                        transform: scale(1.05);
                    }

                    /* Expertise */
                    .expertise-section {
                        padding: 5rem 0;
                        background: white;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #0f172a;
                        margin-bottom: 1rem;
                    }
                    .section-heading p {
                        color: #475569;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .pillar-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .pillar-card {
                        background: #f8fafc;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #f1f5f9;
                        transition: all 0.3s ease;
                    }
                    .pillar-card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                    }
                    .pillar-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .pillar-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #0f172a;
                        margin-bottom: 0.75rem;
                    }
                    .pillar-card p {
                        color: #475569;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        margin-bottom: 1rem;
                    }
                    .accent-orange .pillar-icon,
                    .accent-orange .tag {
                        background: #ffedd5;
                        color: #c2410c;
                    }
                    .accent-cyan .pillar-icon,
                    .accent-cyan .tag {
                        background: #cffafe;
                        color: #0e7490;
                    }
                    .accent-blue .pillar-icon,
                    .accent-blue .tag {
                        background: #dbeafe;
                        color: #1d4ed8;
                    }

                    /* Experience */
                    .experience-section {
                        padding: 5rem 0;
                    }
                    .timeline {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }
                    .timeline::before {
                        content: "";
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        background: #cbd5e1;
                    }
                    .timeline-entry {
                        position: relative;
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                    }
                    .timeline-entry.mirrored {
                        flex-direction: row-reverse;
                    }
                    .timeline-dot {
                        position: absolute;
                        left: 50%;
                        width: 1rem;
                        height: 1rem;
                        margin-top: 1.5rem;
                        transform: translateX(-50%);
                        border-radius: 9999px;
                        border: 4px solid white;
                        background: #94a3b8;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .timeline-dot.current {
                        background: #2563eb;
                    }
                    .job-header {
                        width: 45%;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        text-align: right;
                    }
                    .timeline-entry.mirrored .job-header {
                        align-items: flex-start;
                        text-align: left;
                    }
                    .job-logo,
                    .degree-logo {
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1rem;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        background: white;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0.25rem;
                        flex-shrink: 0;
                    }
                    .job-logo img,
                    .degree-logo img {
                        max-width: 100%;
                        max-height: 100%;
                        object-fit: contain;
                    }
                    .job-header h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .job-company,
                    .degree-school {
                        color: #2563eb;
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .job-meta {
                        font-size: 0.875rem;
                        color: #64748b;
                    }
                    .job-card {
                        width: 45%;
                        background: white;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #f1f5f9;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        box-sizing: border-box;
                    }
                    .job-card ul {
                        margin: 0;
                        padding-left: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        font-size: 0.875rem;
                        color: #475569;
                    }

                    /* About */
                    .about-section {
                        padding: 5rem 0;
                        background: white;
                    }
                    .about-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .action-photo {
                        position: relative;
                        height: 500px;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #f1f5f9;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .action-photo-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(15, 23, 42, 0.1);
                    }
                    .overlay-caption {
                        opacity: 0;
                        color: white;
                        background: rgba(0, 0, 0, 0.6);
                        padding: 1rem;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                        transition: opacity 0.3s ease;
                    }
                    .action-photo:hover .overlay-caption {
                        opacity: 1;
                    }
                    .action-photo-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .about-text h2 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #0f172a;
                        margin-bottom: 1.5rem;
                    }
                    .about-text p {
                        font-size: 1.125rem;
                        color: #475569;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .stat {
                        padding: 1rem;
                        background: #f8fafc;
                        border: 1px solid #e2e8f0;
                        border-radius: 0.5rem;
                    }
                    .stat-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #2563eb;
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        color: #64748b;
                    }

                    /* Projects */
                    .projects-section {
                        padding: 5rem 0;
                        background: #0f172a;
                        color: white;
                    }
                    .projects-heading {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        margin-bottom: 3rem;
                    }
                    .projects-heading h2 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .projects-heading p {
                        color: #94a3b8;
                        margin: 0;
                    }
                    .github-link {
                        color: #60a5fa;
                        text-decoration: none;
                    }
                    .github-link:hover {
                        color: #93c5fd;
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .project-card {
                        background: #1e293b;
                        border: 1px solid #334155;
                        border-radius: 1rem;
                        padding: 2rem;
                        transition: background 0.2s ease;
                    }
                    .project-top {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 1.5rem;
                    }
                    .project-icon {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        font-size: 1.5rem;
                    }
                    .project-date {
                        font-family: monospace;
                        font-size: 0.75rem;
                        color: #94a3b8;
                        border: 1px solid #475569;
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                    }
                    .project-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 0.75rem;
                    }
                    .project-card p {
                        color: #94a3b8;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .accent-indigo .project-icon {
                        background: rgba(99, 102, 241, 0.2);
                    }
                    .accent-indigo .pill {
                        color: #a5b4fc;
                    }
                    .accent-emerald .project-icon {
                        background: rgba(16, 185, 129, 0.2);
                    }
                    .accent-emerald .pill {
                        color: #6ee7b7;
                    }

                    /* Education */
                    .education-section {
                        padding: 5rem 0;
                        background: white;
                    }
                    .degree-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .degree-card {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #f8fafc;
                        border: 1px solid #f1f5f9;
                        transition: border-color 0.2s ease;
                    }
                    .degree-card:hover {
                        border-color: #bfdbfe;
                    }
                    .degree-logo {
                        width: 5rem;
                        height: 5rem;
                        margin-bottom: 0;
                    }
                    .degree-card h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .degree-school {
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .degree-meta {
                        font-size: 0.75rem;
                        color: #64748b;
                        margin: 0.25rem 0 0;
                    }

                    /* Footer */
                    .site-footer {
                        background: #0f172a;
                        color: #cbd5e1;
                        padding: 3rem 0;
                        border-top: 1px solid #1e293b;
                    }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .site-footer h4 {
                        color: white;
                        font-size: 1.125rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-blurb {
                        font-size: 0.875rem;
                        opacity: 0.7;
                    }
                    .footer-socials a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .footer-socials a:hover,
                    .footer-links button:hover {
                        color: white;
                    }
                    .footer-contact,
                    .footer-links {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .footer-links button {
                        background: none;
                        border: none;
                        padding: 0;
                        color: inherit;
                        text-align: left;
                        cursor: pointer;
                        font-size: inherit;
                    }
                    .footer-bottom {
                        max-width: 80rem;
                        margin: 2rem auto 0;
                        padding: 2rem 1.5rem 0;
                        border-top: 1px solid #1e293b;
                        text-align: center;
                        font-size: 0.75rem;
                        opacity: 0.5;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .hero-section {
                            padding: 8rem 1.5rem 5rem;
                        }
                        .hero-grid,
                        .pillar-grid,
                        .about-grid,
                        .project-grid,
                        .degree-grid,
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-text h1 {
                            font-size: 3rem;
                        }
                        .headshot-wrapper {
                            justify-content: center;
                        }
                        .headshot-frame {
                            width: 18rem;
                            height: 18rem;
                        }
                        .action-photo {
                            height: 20rem;
                            order: 2;
                        }
                        .timeline::before {
                            display: none;
                        }
                        .timeline-entry,
                        .timeline-entry.mirrored {
                            flex-direction: column;
                            padding-left: 2rem;
                        }
                        .timeline-dot {
                            left: 0;
                            transform: none;
                        }
                        .job-header,
                        .timeline-entry.mirrored .job-header {
                            width: 100%;
                            align-items: flex-start;
                            text-align: left;
                            margin-bottom: 1rem;
                        }
                        .job-card {
                            width: 100%;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
