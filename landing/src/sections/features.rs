use leptos::prelude::*;

use super::icons::{ICON_BAR_CHART, ICON_CODE, ICON_GITHUB, ICON_SHARE, ICON_SMARTPHONE, Icon};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Features"</h2>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon=ICON_GITHUB
                        title="GitHub Tracking"
                        description="Commit streaks, heatmaps, repositories."
                    />
                    <FeatureCard
                        icon=ICON_CODE
                        title="LeetCode Tracking"
                        description="Solve streaks, difficulty stats, submissions."
                    />
                    <FeatureCard
                        icon=ICON_BAR_CHART
                        title="Analytics"
                        description="Weekly stats and consistency insights."
                    />
                    <FeatureCard
                        icon=ICON_SHARE
                        title="Profile Sharing"
                        description="QR code sharing for profiles."
                    />
                    <FeatureCard
                        icon=ICON_SMARTPHONE
                        title="Mobile First"
                        description="Optimized for mobile experience."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <Icon path=icon size="36" />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
