// ==========================================
// 产量与产能规划 - 命令行入口
// ==========================================
// 用法: site-volume-planning [配置文件路径]
// ==========================================

use std::path::PathBuf;

use anyhow::Context;
use site_volume_planning::{config::PlanningConfig, logging, AppState, APP_NAME, VERSION};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let config = PlanningConfig::load(config_path.as_deref()).context("加载运行配置失败")?;
    logging::init(&config.log_filter);

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let state = AppState::new(config).context("初始化AppState失败")?;

    println!("{} v{}", APP_NAME, VERSION);
    println!();
    println!(
        "{:<14} {:<16} {:<12} {:<6} {:<14} {:>5}  {}",
        "ID", "Name", "Location", "Region", "Status", "Water", "Risk"
    );
    for site in state.dashboard_api.list_site_overview() {
        println!(
            "{:<14} {:<16} {:<12} {:<6} {:<14} {:>5}  {}",
            site.id,
            site.name,
            site.location,
            site.region.as_str(),
            site.status.localized_label(),
            site.water_risk,
            site.risk_label_localized
        );
    }

    let view = state.consolidation_view();
    println!();
    println!("Total sites:        {}", view.kpis.total_sites);
    println!("Total volume (t):   {:.1}", view.kpis.total_volume_t);
    println!("Avg capacity (%):   {:.0}", view.kpis.avg_capacity_pct);
    println!("High water risk:    {}", view.kpis.high_risk_sites);

    Ok(())
}
