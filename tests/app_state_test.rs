// ==========================================
// AppState 集成测试
// ==========================================
// 测试目标: 验证状态组装、种子数据、会话与汇总视图
// ==========================================

mod test_helpers;

use site_volume_planning::api::ApiError;
use site_volume_planning::config::PlanningConfig;
use site_volume_planning::domain::types::{Region, UnitOfMeasure};
use site_volume_planning::AppState;
use test_helpers::{adjustment_form, assert_close, config_with_login, write_temp_json};

#[test]
fn test_seeded_state() {
    println!("\n=== 测试: 默认状态 ===");
    let state = AppState::new(PlanningConfig::default()).expect("Failed to create AppState");

    assert_eq!(state.site_repo.list().len(), 10);
    assert_eq!(state.sku_catalog.list().len(), 10);
    assert_eq!(state.puts_takes_api.ledger().len(), 2);
    assert!(state.volume_input_api.table("cali").is_some());
    assert!(!state.session.is_authenticated());
    println!("✓ 种子数据已载入");
}

#[test]
fn test_consolidation_view_from_tables() {
    println!("\n=== 测试: 由录入表派生汇总视图 ===");
    let mut state = AppState::new(PlanningConfig::default()).unwrap();

    // cali 种子: Colgate Total 42..53 (570 吨), Max Fresh 32..43 (450 吨)
    let view = state.consolidation_view();
    assert_close(view.kpis.total_volume_t, 1020.0);
    assert_eq!(view.kpis.high_risk_sites, 4);
    assert_close(view.kpis.avg_capacity_pct, 0.0);

    let row_id = state
        .volume_input_api
        .add_sku_row("mumbai", Some("Kids"), UnitOfMeasure::Cases)
        .unwrap();
    state
        .volume_input_api
        .set_volume("mumbai", &row_id, "Jan", "5000")
        .unwrap();

    let view = state.consolidation_view();
    assert_close(view.kpis.total_volume_t, 1120.0);
    let apac = view
        .regions
        .iter()
        .find(|r| r.region == Region::Apac)
        .expect("APAC rollup");
    assert_close(apac.planned_volume_t, 100.0);
    println!("✓ 汇总视图随录入表更新");
}

#[test]
fn test_session_supplies_requester() {
    println!("\n=== 测试: 会话用户作为默认申请人 ===");
    let mut state = AppState::new(config_with_login("planner", "secret")).unwrap();

    assert!(matches!(
        state.session.login("planner", "nope"),
        Err(ApiError::InvalidCredentials)
    ));
    state.session.login("planner", "secret").unwrap();
    assert_eq!(state.new_adjustment_form().requested_by, "planner");

    let form = adjustment_form("cali", "Max Fresh", "Demand change", "32", "30", "");
    let record = state.submit_adjustment(&form).unwrap();
    assert_eq!(record.requested_by, "planner");
    assert_eq!(state.puts_takes_api.list()[0].record.id, record.id);

    state.session.logout().unwrap();
    assert!(matches!(
        state.submit_adjustment(&form),
        Err(ApiError::InvalidInput(_))
    ));
    println!("✓ 登出后空申请人被拒绝");
}

#[test]
fn test_custom_reference_data() {
    println!("\n=== 测试: 自定义参考数据 ===");
    let data = write_temp_json(
        r#"{
            "sites": [
                { "id": "lyon", "name": "Lyon", "location": "France", "region": "EMEA",
                  "products": "Toothpaste", "status": "Pending", "waterRisk": 2 }
            ],
            "skus": ["elmex"]
        }"#,
    );
    let config = PlanningConfig {
        reference_data_path: Some(data.path().to_path_buf()),
        ..PlanningConfig::default()
    };

    let state = AppState::new(config).expect("Failed to create AppState");
    assert_eq!(state.dashboard_api.list_site_overview().len(), 1);
    assert!(state.puts_takes_api.ledger().is_empty());
    assert!(state.volume_input_api.table("cali").is_none());
    assert_eq!(state.new_adjustment_form().sku, "elmex");
    println!("✓ 参考数据来自文件");
}

#[test]
fn test_invalid_reference_data_rejected() {
    println!("\n=== 测试: 非法参考数据 ===");
    let data = write_temp_json(
        r#"{
            "sites": [
                { "id": "lyon", "name": "Lyon", "location": "France", "region": "EMEA",
                  "products": "Toothpaste", "status": "Pending", "waterRisk": 9 }
            ],
            "skus": ["elmex"]
        }"#,
    );
    let config = PlanningConfig {
        reference_data_path: Some(data.path().to_path_buf()),
        ..PlanningConfig::default()
    };

    assert!(matches!(AppState::new(config), Err(ApiError::InvalidInput(_))));
    println!("✓ 风险评分越界被拒绝");
}
