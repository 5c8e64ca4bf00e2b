use pageview_core::{CursorTool, FeatureSet};
use pageview_viewer::CursorToolController;

fn opened() -> CursorToolController {
    let mut tools = CursorToolController::new(FeatureSet::all());
    tools.document_opened(CursorTool::Pan);
    tools
}

#[test]
fn test_exactly_one_tool_checked() {
    let mut tools = opened();
    for tool in [
        CursorTool::ZoomWindow,
        CursorTool::SelectLayerObject,
        CursorTool::AngularHighlight,
        CursorTool::SetHighlightHeight,
    ] {
        tools.set_tool(tool);
        let checked = CursorTool::ALL
            .iter()
            .filter(|t| tools.is_checked(**t))
            .count();
        assert_eq!(checked, 1);
        assert!(tools.is_checked(tool));
    }
}

#[test]
fn test_persistent_tools_do_not_toggle_off() {
    let mut tools = opened();
    for tool in [
        CursorTool::Pan,
        CursorTool::ZoomWindow,
        CursorTool::SelectLayerObject,
        CursorTool::SetHighlightHeight,
    ] {
        tools.set_tool(tool);
        assert_eq!(tools.set_tool(tool), None);
        assert_eq!(tools.active(), tool);
    }
}

#[test]
fn test_override_is_one_level_deep() {
    let mut tools = opened();
    tools.set_tool(CursorTool::SelectLayerObject);
    tools.begin_override_gesture(CursorTool::DeleteLayerObjects);
    tools.begin_override_gesture(CursorTool::DeleteLayerObjects);
    tools.end_override_gesture();
    assert_eq!(tools.active(), CursorTool::SelectLayerObject);
}

#[test]
fn test_default_override_tool_falls_back_to_pan() {
    let mut tools = CursorToolController::new(FeatureSet::all());
    tools.document_opened(CursorTool::DeleteLayerObjects);
    assert_eq!(tools.active(), CursorTool::Pan);
    assert!(!tools.is_overriding());
}
