// common/src/models/factory.rs

use crate::errors::PortalError;

/// Digital factory unit paths, in chooser display order.
const FACTORY_UNITS: &[(&str, &str)] = &[
    ("智能线上仓储单元", "/zhinengxianshangcanchudanyuan/#/"),
    ("成品生产线", "/chengpinshengchanxian/#/"),
    ("智能检测单元", "/zhinengjiancedanyuan/#/"),
    ("MOMA单元", "/momadanyuan/#/"),
    ("智能加工单元", "/zhinengjiagongdanyuan/#/"),
    ("智能装配单元", "/zhinengzhuangpeidanyuan/#/"),
    ("智能包装单元", "/zhinengbaozhuangdanyuan/#/"),
    ("智能车间", "/zhinengchejian/#/"),
    ("智能车间规划", "/zhinengchejianguihua/#/"),
];

/// Unit names for the chooser modal, in display order.
pub fn unit_names() -> Vec<&'static str> {
    FACTORY_UNITS.iter().map(|(name, _)| *name).collect()
}

/// Path suffix for a unit, by exact name.
pub fn unit_path(unit: &str) -> Option<&'static str> {
    FACTORY_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, path)| *path)
}

/// Base domain for a virtual machine number.
///
/// VMs 1-5 are compared numerically and map to the vd0N hosts; VM "6"
/// is matched as the literal string and maps to a plain IP. The
/// numeric/string split mirrors the deployed routing tables; see
/// DESIGN.md before changing it.
pub fn vm_base_url(vm_number: &str) -> Result<String, PortalError> {
    if vm_number == "6" {
        return Ok("http://10.40.6.165".to_string());
    }
    match vm_number.parse::<u32>() {
        Ok(n) if (1..=5).contains(&n) => Ok(format!("https://vd0{}.zime.edu.cn", n)),
        _ => Err(PortalError::UnknownVm(vm_number.to_string())),
    }
}
